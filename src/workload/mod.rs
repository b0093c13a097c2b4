// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Multi-threaded stress workload for the Maui Trie.
//!
//! Writers insert disjoint key ranges while readers search concurrently.
//! Once every thread has joined, half of each writer's keys are deleted and
//! the final key count is checked against what should remain.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::workload::WorkloadConfig;
use crate::config::Validate;
use crate::data_structures::MauiTrie;
use crate::error::{LanaiError, LanaiResult};

/// Outcome of a stress run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StressReport {
    /// Keys inserted by all writers
    pub inserted: usize,
    /// Keys deleted after the concurrent phase
    pub deleted: usize,
    /// Keys left in the trie at the end
    pub remaining: usize,
    /// Searches issued by reader threads
    pub lookups: usize,
    /// Reader searches that found their key
    pub hits: usize,
    /// Nodes in the trie at the end, root included
    pub node_count: usize,
    /// Wall-clock duration of the whole run
    pub elapsed_ms: u64,
}

/// Drives a [`MauiTrie`] from several threads at once.
#[derive(Debug)]
pub struct StressRunner {
    config: WorkloadConfig,
    trie: Arc<MauiTrie>,
    /// Writer that panics right after the start barrier
    #[cfg(test)]
    panic_writer: Option<usize>,
}

impl StressRunner {
    /// Creates a runner over a fresh, empty trie.
    pub fn new(config: WorkloadConfig) -> Self {
        Self {
            config,
            trie: Arc::new(MauiTrie::new()),
            #[cfg(test)]
            panic_writer: None,
        }
    }

    /// The trie being exercised.
    pub fn trie(&self) -> &Arc<MauiTrie> {
        &self.trie
    }

    fn key(prefix: &str, writer: usize, index: usize) -> String {
        format!("{prefix}_{writer}_{index}")
    }

    /// Runs the workload to completion.
    ///
    /// # Returns
    ///
    /// * `Ok(StressReport)` - Counters for the run.
    /// * `Err(LanaiError::Config)` - If the workload config does not validate.
    /// * `Err(LanaiError::Workload)` - If a thread panicked, a writer could not
    ///   read back its own key, or the final key count is wrong.
    pub fn run(&self) -> LanaiResult<StressReport> {
        self.config.validate()?;

        let WorkloadConfig {
            writer_threads,
            reader_threads,
            keys_per_writer,
            ref key_prefix,
        } = self.config;

        #[cfg(test)]
        let panic_writer = self.panic_writer;

        info!(
            writer_threads,
            reader_threads, keys_per_writer, "Starting stress workload"
        );
        let started = Instant::now();

        let barrier = Arc::new(Barrier::new(writer_threads + reader_threads));
        let stop_readers = Arc::new(AtomicBool::new(false));

        let writers: Vec<_> = (0..writer_threads)
            .map(|writer| {
                let trie = Arc::clone(&self.trie);
                let barrier = Arc::clone(&barrier);
                let prefix = key_prefix.clone();

                thread::spawn(move || -> Result<usize, String> {
                    barrier.wait();
                    #[cfg(test)]
                    if panic_writer == Some(writer) {
                        panic!("writer {writer} aborted");
                    }

                    (0..keys_per_writer).try_for_each(|index| {
                        let key = Self::key(&prefix, writer, index);
                        trie.insert(&key);
                        if trie.search(&key) {
                            Ok(())
                        } else {
                            Err(format!("Writer {writer} failed to verify key {key}"))
                        }
                    })?;
                    Ok(keys_per_writer)
                })
            })
            .collect();

        let readers: Vec<_> = (0..reader_threads)
            .map(|reader| {
                let trie = Arc::clone(&self.trie);
                let barrier = Arc::clone(&barrier);
                let stop_readers = Arc::clone(&stop_readers);
                let prefix = key_prefix.clone();

                thread::spawn(move || -> (usize, usize) {
                    barrier.wait();
                    let (mut lookups, mut hits) = (0usize, 0usize);
                    let mut cursor = reader;
                    while !stop_readers.load(Ordering::SeqCst) {
                        let writer = cursor % writer_threads;
                        let index = (cursor / writer_threads) % keys_per_writer;
                        if trie.search(Self::key(&prefix, writer, index)) {
                            hits += 1;
                        }
                        lookups += 1;
                        cursor = cursor.wrapping_add(reader_threads.max(1));
                    }
                    (lookups, hits)
                })
            })
            .collect();

        let mut inserted = 0;
        let mut failures = Vec::new();
        for (writer, handle) in writers.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(count)) => inserted += count,
                Ok(Err(message)) => failures.push(message),
                Err(_) => failures.push(format!("Writer {writer} panicked")),
            }
        }
        // Readers run until every writer has finished, however it finished.
        stop_readers.store(true, Ordering::SeqCst);

        let (mut lookups, mut hits) = (0, 0);
        for (reader, handle) in readers.into_iter().enumerate() {
            match handle.join() {
                Ok((reader_lookups, reader_hits)) => {
                    lookups += reader_lookups;
                    hits += reader_hits;
                }
                Err(_) => failures.push(format!("Reader {reader} panicked")),
            }
        }

        if !failures.is_empty() {
            return Err(LanaiError::Workload(failures.join("; ")));
        }
        debug!(inserted, lookups, hits, "Concurrent phase finished");

        let mut deleted = 0;
        for writer in 0..writer_threads {
            for index in (0..keys_per_writer).step_by(2) {
                self.trie.delete(Self::key(key_prefix, writer, index));
                deleted += 1;
            }
        }

        let remaining = self.trie.len();
        if remaining != inserted - deleted {
            return Err(LanaiError::Workload(format!(
                "Expected {} keys after deletes, found {remaining}",
                inserted - deleted
            )));
        }

        let report = StressReport {
            inserted,
            deleted,
            remaining,
            lookups,
            hits,
            node_count: self.trie.node_count(),
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        info!(
            remaining = report.remaining,
            elapsed_ms = report.elapsed_ms,
            "Stress workload finished"
        );

        Ok(report)
    }
}

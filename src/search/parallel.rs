//! Root-level parallel search
//!
//! The root's ordered children are split into contiguous chunks, one scoped
//! thread per chunk. Each worker owns a [`Searcher`] and scans its chunk with a
//! full window; the pass then merges the per-worker bests in worker order.

use std::ops::Range;
use std::thread;
use std::time::Instant;

use tracing::{debug, warn};

use super::negamax::{SearchStats, Searcher};
use super::state::GameState;
use crate::board::Pos;
use crate::error::{EngineError, EngineResult};
use crate::rules::SCORE_BOUND;

/// Best move found by one worker over its chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerResult {
    pub pos: Pos,
    pub value: i32,
    pub stats: SearchStats,
}

/// Merged outcome of one root pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassResult {
    pub pos: Pos,
    /// Value for the player to move at the root
    pub value: i32,
    pub depth: u8,
    pub stats: SearchStats,
}

/// Split `len` items over at most `threads` workers.
///
/// With at least `threads` items every worker gets `len / threads` of them and
/// the first also takes the remainder. With fewer items each worker gets one.
pub fn partition(len: usize, threads: usize) -> Vec<Range<usize>> {
    let threads = threads.max(1);
    if len < threads {
        return (0..len).map(|i| i..i + 1).collect();
    }

    let delta = len / threads;
    let rem = len % threads;
    let mut chunks = Vec::with_capacity(threads);
    chunks.push(0..delta + rem);
    for i in 1..threads {
        let start = rem + delta * i;
        chunks.push(start..start + delta);
    }
    chunks
}

/// Scan one chunk, keeping the first strictly better child
fn scan_chunk(chunk: &[GameState], depth: u8, trim: Option<usize>) -> WorkerResult {
    let mut searcher = Searcher::new(trim);
    let mut best = WorkerResult {
        pos: Pos::default(),
        value: -SCORE_BOUND,
        stats: SearchStats::default(),
    };

    for child in chunk {
        let value = searcher.evaluate_child(child, depth - 1);
        if value > best.value {
            best.value = value;
            best.pos = child.last_move();
        }
    }

    best.stats = searcher.stats();
    best
}

/// Evaluate every root child at `depth - 1` across up to `threads` workers.
///
/// Returns `None` when there are no children. A panicking worker fails the
/// whole pass; partial results are never merged.
pub fn search_root(
    children: &[GameState],
    depth: u8,
    threads: usize,
    trim: Option<usize>,
) -> EngineResult<Option<PassResult>> {
    if depth == 0 {
        return Err(EngineError::InvalidDepth { depth });
    }
    if children.is_empty() {
        return Ok(None);
    }

    run_pass(children.len(), depth, threads, |range| {
        scan_chunk(&children[range], depth, trim)
    })
}

/// Partition `len` children, scan each chunk on its own scoped thread and
/// merge the per-worker bests in worker order.
fn run_pass<F>(
    len: usize,
    depth: u8,
    threads: usize,
    scan: F,
) -> EngineResult<Option<PassResult>>
where
    F: Fn(Range<usize>) -> WorkerResult + Sync,
{
    let start = Instant::now();
    let chunks = partition(len, threads);

    // One entry per spawned worker, in worker order
    let results: Vec<thread::Result<WorkerResult>> = thread::scope(|s| {
        let scan = &scan;
        let handles: Vec<_> = chunks
            .iter()
            .map(|range| {
                let range = range.clone();
                s.spawn(move || scan(range))
            })
            .collect();
        handles.into_iter().map(|h| h.join()).collect()
    });

    let mut merged: Option<PassResult> = None;
    let mut stats = SearchStats::default();
    for (worker, result) in results.into_iter().enumerate() {
        let result = result.map_err(|_| {
            warn!(worker, depth, "search worker panicked");
            EngineError::WorkerPanicked { worker, depth }
        })?;
        debug!(
            worker,
            chunk = ?chunks[worker],
            x = result.pos.x,
            y = result.pos.y,
            value = result.value,
            nodes = result.stats.nodes,
            "worker finished"
        );
        stats.merge(&result.stats);
        match merged {
            Some(ref best) if best.value >= result.value => {}
            _ => {
                merged = Some(PassResult {
                    pos: result.pos,
                    value: result.value,
                    depth,
                    stats: SearchStats::default(),
                });
            }
        }
    }

    Ok(merged.map(|mut pass| {
        pass.stats = stats;
        debug!(
            depth,
            workers = chunks.len(),
            x = pass.pos.x,
            y = pass.pos.y,
            value = pass.value,
            nodes = stats.nodes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "root pass complete"
        );
        pass
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Player, BOARD_WIDTH};
    use crate::rules::WIN_SCORE;
    use crate::search::order_successors;

    fn assert_covers(len: usize, threads: usize) {
        let chunks = partition(len, threads);
        let mut next = 0;
        for chunk in &chunks {
            assert_eq!(chunk.start, next, "gap or overlap for len {len}, threads {threads}");
            assert!(!chunk.is_empty());
            next = chunk.end;
        }
        assert_eq!(next, len);
    }

    #[test]
    fn test_partition_covers_exactly_once() {
        for len in 0..40 {
            for threads in 1..12 {
                assert_covers(len, threads);
            }
        }
    }

    #[test]
    fn test_partition_remainder_goes_first() {
        let chunks = partition(10, 8);
        assert_eq!(chunks.len(), 8);
        assert_eq!(chunks[0], 0..3);
        assert!(chunks[1..].iter().all(|c| c.len() == 1));

        let chunks = partition(23, 4);
        assert_eq!(chunks[0].len(), 5 + 3);
        assert!(chunks[1..].iter().all(|c| c.len() == 5));
    }

    #[test]
    fn test_partition_fewer_items_than_threads() {
        let chunks = partition(3, 8);
        assert_eq!(chunks, vec![0..1, 1..2, 2..3]);
        assert!(partition(0, 8).is_empty());
    }

    #[test]
    fn test_search_root_rejects_zero_depth() {
        let children = GameState::new(Player::B).successors();
        assert_eq!(
            search_root(&children, 0, 4, None),
            Err(EngineError::InvalidDepth { depth: 0 })
        );
    }

    #[test]
    fn test_search_root_no_children() {
        assert_eq!(search_root(&[], 3, 8, None), Ok(None));
    }

    #[test]
    fn test_search_root_finds_win() {
        let mut root = GameState::new(Player::B);
        for (x, p) in [
            (6, Player::B),
            (0, Player::A),
            (7, Player::B),
            (0, Player::A),
            (8, Player::B),
            (1, Player::A),
        ] {
            let y = root.board().first_empty_row(x).unwrap();
            root.apply_move(Pos::new(x, y), p);
        }
        let mut children = root.successors();
        order_successors(&mut children, None);

        for threads in [1, 3, 8] {
            let pass = search_root(&children, 1, threads, None).unwrap().unwrap();
            assert_eq!(pass.value, WIN_SCORE);
            assert_eq!(pass.pos.y, 0);
            assert!(pass.pos.x == 5 || pass.pos.x == 9);
            assert_eq!(pass.stats.nodes, BOARD_WIDTH as u64);
        }
    }

    #[test]
    fn test_search_root_independent_of_thread_count() {
        let mut root = GameState::new(Player::A);
        for (x, p) in [
            (4, Player::A),
            (4, Player::B),
            (3, Player::A),
            (5, Player::B),
            (2, Player::A),
        ] {
            let y = root.board().first_empty_row(x).unwrap();
            root.apply_move(Pos::new(x, y), p);
        }
        let mut children = root.successors();
        order_successors(&mut children, None);

        let single = search_root(&children, 3, 1, None).unwrap().unwrap();
        for threads in [2, 5, 8, 16] {
            let pass = search_root(&children, 3, threads, None).unwrap().unwrap();
            assert_eq!((pass.pos, pass.value), (single.pos, single.value), "threads {threads}");
        }
    }

    fn stub_result(index: usize, value: i32) -> WorkerResult {
        WorkerResult {
            pos: Pos::from_index(index),
            value,
            stats: SearchStats {
                nodes: 1,
                cutoffs: 0,
            },
        }
    }

    #[test]
    fn test_run_pass_keeps_first_maximum() {
        // Workers 1 and 3 tie on the best value; worker order decides
        let values = [0, 1, -1, 1];
        let pass = run_pass(4, 2, 4, |range| stub_result(range.start, values[range.start]))
            .unwrap()
            .unwrap();
        assert_eq!(pass.pos, Pos::from_index(1));
        assert_eq!(pass.value, 1);
        assert_eq!(pass.depth, 2);
        assert_eq!(pass.stats.nodes, 4);
    }

    #[test]
    fn test_worker_panic_fails_the_pass() {
        let result = run_pass(8, 3, 4, |range| {
            if range.start == 4 {
                panic!("worker blew up");
            }
            stub_result(range.start, WIN_SCORE)
        });
        assert_eq!(result, Err(EngineError::WorkerPanicked { worker: 2, depth: 3 }));
    }
}

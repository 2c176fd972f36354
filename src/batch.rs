use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{debug, info, warn};

use crate::{AlignerConfig, AlignerError, Aligner, AlignmentParams, AlignmentResult, Result, Sequence};

struct WorkItem {
    index: usize,
    seq1: Sequence,
    seq2: Sequence,
    params: AlignmentParams,
}

struct WorkResult {
    index: usize,
    worker_id: usize,
    result: Result<AlignmentResult>,
}

/// Runs one alignment, turning a panic into an error so the caller still
/// gets a result for the pair.
fn run_job<F>(job: F) -> Result<AlignmentResult>
where
    F: FnOnce() -> Result<AlignmentResult>,
{
    panic::catch_unwind(AssertUnwindSafe(job)).unwrap_or_else(|payload| {
        Err(AlignerError::WorkerError(format!(
            "alignment panicked: {}",
            panic_message(payload.as_ref())
        )))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

/// Pool of worker threads, each running independent alignments.
pub struct BatchAligner {
    work_tx: Option<Sender<WorkItem>>,
    result_rx: Receiver<WorkResult>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl BatchAligner {
    pub fn new(config: AlignerConfig, workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(AlignerError::InvalidConfig(
                "batch aligner needs at least one worker".to_string(),
            ));
        }

        let aligner = Arc::new(Aligner::new(config)?);
        let (work_tx, work_rx) = bounded(workers);
        let (result_tx, result_rx) = unbounded();

        let handles: Vec<_> = (0..workers)
            .map(|worker_id| {
                let aligner = Arc::clone(&aligner);
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                thread::spawn(move || Self::worker(worker_id, &aligner, work_rx, result_tx))
            })
            .collect();
        info!("started {} alignment workers", workers);

        Ok(Self {
            work_tx: Some(work_tx),
            result_rx,
            workers: handles,
        })
    }

    fn worker(
        worker_id: usize,
        aligner: &Aligner,
        work_rx: Receiver<WorkItem>,
        result_tx: Sender<WorkResult>,
    ) {
        while let Ok(work) = work_rx.recv() {
            let result = run_job(|| {
                aligner.align(work.seq1.as_bytes(), work.seq2.as_bytes(), work.params)
            });
            let sent = result_tx.send(WorkResult {
                index: work.index,
                worker_id,
                result,
            });
            if sent.is_err() {
                break;
            }
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Aligns every pair and returns the results in input order.
    ///
    /// All submitted pairs are drained before returning, so a failure in
    /// one pair does not leak results into the next call. The first error
    /// by input position is returned.
    pub fn align_all(
        &self,
        pairs: Vec<(Sequence, Sequence)>,
        params: AlignmentParams,
    ) -> Result<Vec<AlignmentResult>> {
        let work_tx = self
            .work_tx
            .as_ref()
            .ok_or_else(|| AlignerError::WorkerError("work queue closed".to_string()))?;

        let total = pairs.len();
        for (index, (seq1, seq2)) in pairs.into_iter().enumerate() {
            // Results go to an unbounded channel, so workers never stall on
            // output and this send always makes progress
            work_tx
                .send(WorkItem {
                    index,
                    seq1,
                    seq2,
                    params,
                })
                .map_err(|e| AlignerError::WorkerError(e.to_string()))?;
        }

        let mut slots: Vec<Option<Result<AlignmentResult>>> = (0..total).map(|_| None).collect();
        for _ in 0..total {
            let work_result = self
                .result_rx
                .recv()
                .map_err(|e| AlignerError::WorkerError(e.to_string()))?;
            debug!(
                "worker {} finished pair {}",
                work_result.worker_id, work_result.index
            );
            slots[work_result.index] = Some(work_result.result);
        }

        slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    Err(AlignerError::WorkerError("missing alignment result".to_string()))
                })
            })
            .collect()
    }
}

impl Drop for BatchAligner {
    fn drop(&mut self) {
        // Closing the work queue stops the workers
        self.work_tx.take();

        while let Some(worker) = self.workers.pop() {
            if let Err(e) = worker.join() {
                warn!("alignment worker panicked: {}", panic_message(e.as_ref()));
            }
        }
    }
}

use crate::domain::model::{ReconOutput, ReconRequest};
use crate::domain::ports::ReconBackend;
use crate::utils::error::{QsmError, Result};

/// Selects the reconstruction pathway from the number of echo times.
///
/// Single-shot and stateless: one call dispatches to exactly one backend
/// routine (or fails without calling any) and blocks until it returns.
pub struct QsmDispatcher<B: ReconBackend> {
    backend: B,
}

impl<B: ReconBackend> QsmDispatcher<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn run(&self, request: &ReconRequest) -> Result<ReconOutput> {
        match request.echo_times.len() {
            2 => {
                tracing::info!(
                    "Dual-echo acquisition (echo times {:?} ms), dispatching to dual-echo QSM reconstruction",
                    request.echo_times
                );
                self.backend.dual_echo(request)
            }
            1 => {
                tracing::info!(
                    "Single-echo acquisition (echo time {:?} ms), dispatching to single-echo QSM reconstruction",
                    request.echo_times
                );
                self.backend.single_echo(request)
            }
            count => {
                tracing::info!(
                    "Cannot dispatch QSM reconstruction: {} echo times supplied",
                    count
                );
                Err(QsmError::InvalidEchoTimes { count })
            }
        }
    }
}

use super::clonalg_engine::ProgressCallback;

/// Reports generation boundaries through the `log` facade
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting...", generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best_affinity: Option<f64>, memory_size: usize) {
        match best_affinity {
            Some(best) => log::info!(
                "Generation {} complete. Best affinity: {:.4}, memory cells: {}",
                generation, best, memory_size
            ),
            None => log::info!(
                "Generation {} complete. No antibodies selected, memory cells: {}",
                generation, memory_size
            ),
        }
    }
}

/// Forwards progress to another thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete { generation: usize, best_affinity: Option<f64>, memory_size: usize },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, best_affinity: Option<f64>, memory_size: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_affinity,
            memory_size,
        });
    }
}

impl ProgressCallback for () {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _best_affinity: Option<f64>, _memory_size: usize) {}
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best_affinity: Option<f64>, memory_size: usize) {
        (**self).on_generation_complete(generation, best_affinity, memory_size);
    }
}

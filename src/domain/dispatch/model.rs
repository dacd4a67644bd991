/// Run-level limits applied by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSettings {
    pub max_concurrency: usize,
    pub ramp_up_interval: usize,
    /// 0 means no limit
    pub max_sentences: usize,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            max_concurrency: 10,
            ramp_up_interval: 100,
            max_sentences: 0,
        }
    }
}

/// Why the dispatcher stopped consuming input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HaltReason {
    /// The corpus ran out of sentences
    Exhausted,
    /// The configured maximum number of sentences was reached
    LimitReached,
    /// At least one sentence of the last batch failed
    Aborted { failed: Vec<usize> },
}

impl std::fmt::Display for HaltReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HaltReason::Exhausted => write!(f, "input exhausted"),
            HaltReason::LimitReached => write!(f, "max number of sentences reached"),
            HaltReason::Aborted { failed } => {
                let failed: Vec<String> = failed.iter().map(|n| format!("#{}", n)).collect();
                write!(f, "aborted after failed sentence(s) {}", failed.join(", "))
            }
        }
    }
}

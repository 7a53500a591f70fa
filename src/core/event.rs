use std::fmt;

use crate::core::Ticks;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    // Process ran during [time, time + 1)
    Running { id: String, time: Ticks },
    Finished { id: String, time: Ticks },
    // Nothing ready at `from`; time jumped to the next arrival
    Idle { from: Ticks, to: Ticks },
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running { id, time } => write!(f, "t={time}: running {id}"),
            Self::Finished { id, time } => write!(f, "t={time}: finished {id}"),
            Self::Idle { from, to } => write!(f, "t={from}: idle until {to}"),
        }
    }
}

use std::fmt;

/// Names of the POSIX signals 1..=31, as Linux `strsignal`-style descriptions.
const SIGNAL_NAMES: [&str; 31] = [
    "hangup",
    "interrupt",
    "quit",
    "illegal instruction",
    "trace/breakpoint trap",
    "aborted",
    "bus error",
    "floating point exception",
    "killed",
    "user defined signal 1",
    "segmentation fault",
    "user defined signal 2",
    "broken pipe",
    "alarm clock",
    "terminated",
    "stack fault",
    "child exited",
    "continued",
    "stopped (signal)",
    "stopped",
    "stopped (tty input)",
    "stopped (tty output)",
    "urgent I/O condition",
    "CPU time limit exceeded",
    "file size limit exceeded",
    "virtual timer expired",
    "profiling timer expired",
    "window changed",
    "I/O possible",
    "power failure",
    "bad system call",
];

/// The OS signal that triggered a container shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Hangup,
    Interrupt,
    Quit,
    Terminate,
    /// Any other signal, by raw number.
    Other(i32),
}

impl Signal {
    /// Map a raw POSIX signal number.
    pub fn from_raw(signo: i32) -> Self {
        match signo {
            1 => Signal::Hangup,
            2 => Signal::Interrupt,
            3 => Signal::Quit,
            15 => Signal::Terminate,
            other => Signal::Other(other),
        }
    }

    /// The raw signal number.
    pub fn number(&self) -> i32 {
        match self {
            Signal::Hangup => 1,
            Signal::Interrupt => 2,
            Signal::Quit => 3,
            Signal::Terminate => 15,
            Signal::Other(signo) => *signo,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signo = self.number();
        let name = usize::try_from(signo)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| SIGNAL_NAMES.get(idx));
        match name {
            Some(name) => f.write_str(name),
            None => write!(f, "signal {}", signo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_display() {
        assert_eq!(Signal::Interrupt.to_string(), "interrupt");
        assert_eq!(Signal::Terminate.to_string(), "terminated");
        assert_eq!(Signal::Hangup.to_string(), "hangup");
        assert_eq!(Signal::Quit.to_string(), "quit");
    }

    #[test]
    fn test_signal_display_named_table() {
        let cases = [
            (4, "illegal instruction"),
            (6, "aborted"),
            (9, "killed"),
            (10, "user defined signal 1"),
            (11, "segmentation fault"),
            (12, "user defined signal 2"),
            (13, "broken pipe"),
            (14, "alarm clock"),
            (17, "child exited"),
            (19, "stopped (signal)"),
            (20, "stopped"),
            (28, "window changed"),
            (31, "bad system call"),
        ];
        for (signo, expected) in cases {
            assert_eq!(Signal::from_raw(signo).to_string(), expected, "signal {}", signo);
        }
    }

    #[test]
    fn test_signal_display_unnamed_numbers() {
        assert_eq!(Signal::from_raw(0).to_string(), "signal 0");
        assert_eq!(Signal::from_raw(32).to_string(), "signal 32");
        assert_eq!(Signal::from_raw(64).to_string(), "signal 64");
        assert_eq!(Signal::from_raw(-1).to_string(), "signal -1");
    }

    #[test]
    fn test_signal_from_raw() {
        assert_eq!(Signal::from_raw(2), Signal::Interrupt);
        assert_eq!(Signal::from_raw(15), Signal::Terminate);
        assert_eq!(Signal::from_raw(3), Signal::Quit);
        assert_eq!(Signal::from_raw(12), Signal::Other(12));
    }

    #[test]
    fn test_signal_number_round_trips_named_variants() {
        for signal in [
            Signal::Hangup,
            Signal::Interrupt,
            Signal::Quit,
            Signal::Terminate,
        ] {
            assert_eq!(Signal::from_raw(signal.number()), signal);
        }
    }
}

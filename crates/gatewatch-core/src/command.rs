//! Simulated gate commands and their availability rules

use crate::types::GateStatus;

/// Pseudo-command an operator can send from the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateCommand {
    Open,
    Close,
    Alarm,
}

impl GateCommand {
    /// All commands in control-panel order
    pub const ALL: [GateCommand; 3] = [GateCommand::Open, GateCommand::Close, GateCommand::Alarm];

    /// Label shown on the button and in the acknowledgment
    pub fn label(&self) -> &'static str {
        match self {
            GateCommand::Open => "Manual Open",
            GateCommand::Close => "Manual Close",
            GateCommand::Alarm => "Emergency Alarm",
        }
    }

    /// Button caption (the alarm button reads differently from its acknowledgment)
    pub fn button_caption(&self) -> &'static str {
        match self {
            GateCommand::Open => "Manual Open",
            GateCommand::Close => "Manual Close",
            GateCommand::Alarm => "Trigger Alarm",
        }
    }

    /// Key that triggers the command on the detail screen
    pub fn shortcut(&self) -> char {
        match self {
            GateCommand::Open => 'o',
            GateCommand::Close => 'c',
            GateCommand::Alarm => 'a',
        }
    }

    /// Whether the command makes sense for a gate in `status`.
    ///
    /// Opening an open gate and closing a closed gate are disabled.
    pub fn is_available_for(&self, status: GateStatus) -> bool {
        match self {
            GateCommand::Open => status != GateStatus::Open,
            GateCommand::Close => status != GateStatus::Closed,
            GateCommand::Alarm => true,
        }
    }

    /// Acknowledgment text surfaced once the simulated command resolves
    pub fn acknowledgment(&self, gate_name: &str) -> String {
        format!("{} command sent to {}", self.label(), gate_name)
    }
}

impl std::fmt::Display for GateCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_disabled_only_when_open() {
        assert!(!GateCommand::Open.is_available_for(GateStatus::Open));
        assert!(GateCommand::Open.is_available_for(GateStatus::Closed));
        assert!(GateCommand::Open.is_available_for(GateStatus::Maintenance));
    }

    #[test]
    fn test_close_disabled_only_when_closed() {
        assert!(!GateCommand::Close.is_available_for(GateStatus::Closed));
        assert!(GateCommand::Close.is_available_for(GateStatus::Open));
        assert!(GateCommand::Close.is_available_for(GateStatus::Maintenance));
    }

    #[test]
    fn test_alarm_always_available() {
        for status in [GateStatus::Open, GateStatus::Closed, GateStatus::Maintenance] {
            assert!(GateCommand::Alarm.is_available_for(status));
        }
    }

    #[test]
    fn test_acknowledgment_names_command_and_gate() {
        let msg = GateCommand::Close.acknowledgment("Gate 4 - Depok Crossing");
        assert_eq!(msg, "Manual Close command sent to Gate 4 - Depok Crossing");
    }

    #[test]
    fn test_shortcuts_are_distinct() {
        let keys: Vec<char> = GateCommand::ALL.iter().map(|c| c.shortcut()).collect();
        assert_eq!(keys, vec!['o', 'c', 'a']);
    }
}

//! Common driver interface

/// Identity and command surface shared by all drivers
pub trait Driver {
    /// Driver name from its configuration
    fn name(&self) -> &str;

    /// Pin the driver is attached to
    fn pin(&self) -> u8;

    /// Names of the externally invocable operations, in declaration order
    fn commands(&self) -> &'static [&'static str];

    /// Check if the driver declares a command
    fn has_command(&self, command: &str) -> bool {
        self.commands().iter().any(|c| *c == command)
    }
}

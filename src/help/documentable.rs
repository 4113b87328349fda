//! The surface the help renderer reads

use crate::model::{OptionSet, Signature};

/// An element of the command tree that can be documented
pub trait Documentable {
    fn name(&self) -> &str;

    fn brief(&self) -> &str;

    fn description(&self) -> &str;

    fn declared_options(&self) -> &OptionSet;

    /// Nested commands and handlers, sorted by name
    fn declared_commands(&self) -> Vec<&dyn Documentable>;

    /// Only commands have a signature
    fn signature(&self) -> Option<&Signature> {
        None
    }

    fn find_command(&self, name: &str) -> Option<&dyn Documentable> {
        self.declared_commands()
            .into_iter()
            .find(|element| element.name() == name)
    }
}

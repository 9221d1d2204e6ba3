//! Session State
//!
//! The server remembers, per connection, one "used" tube for producing and a
//! set of "watched" tubes for reserving. The client mirrors both here and
//! converges them lazily: before each command, [`Session::reconcile`] returns
//! the `use` / `watch` / `ignore` commands needed to reach the caller's intent.
//!
//! ## Invariants
//! - `used` is never empty
//! - `watched` is never empty
//! - nothing is committed unless every name involved is valid

use std::collections::BTreeSet;

use crate::name::{check_name, NameError, NameErrorKind};
use crate::protocol::Command;

/// Tube every new connection starts on
pub const DEFAULT_TUBE: &str = "default";

/// Client-side mirror of the server's tube selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    used: String,
    watched: BTreeSet<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            used: DEFAULT_TUBE.to_string(),
            watched: BTreeSet::from([DEFAULT_TUBE.to_string()]),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tube currently selected for `put`
    pub fn used(&self) -> &str {
        &self.used
    }

    /// Tubes currently watched for `reserve`
    pub fn watched(&self) -> &BTreeSet<String> {
        &self.watched
    }

    /// Compute the commands that bring the server to the requested state
    ///
    /// `used` is the tube the next command must produce into, `watched` the
    /// exact set it must reserve from; `None` leaves that side alone.
    /// On success the remembered state already reflects the returned commands,
    /// which must be written before the target command. On error nothing is
    /// changed.
    pub fn reconcile(
        &mut self,
        used: Option<&str>,
        watched: Option<&BTreeSet<String>>,
    ) -> Result<Vec<Command<'static>>, NameError> {
        let used = used.filter(|tube| *tube != self.used);
        if let Some(tube) = used {
            check_name(tube)?;
        }

        let (added, removed) = match watched {
            Some(target) => {
                if target.is_empty() {
                    return Err(NameError {
                        name: String::new(),
                        kind: NameErrorKind::Empty,
                    });
                }
                let added: Vec<String> = target.difference(&self.watched).cloned().collect();
                for tube in &added {
                    check_name(tube)?;
                }
                let removed: Vec<String> = self.watched.difference(target).cloned().collect();
                (added, removed)
            }
            None => (Vec::new(), Vec::new()),
        };

        // Validation done; commit.
        let mut commands = Vec::with_capacity(1 + added.len() + removed.len());

        if let Some(tube) = used {
            self.used = tube.to_string();
            commands.push(Command::Use {
                tube: tube.to_string(),
            });
        }

        for tube in added {
            self.watched.insert(tube.clone());
            commands.push(Command::Watch { tube });
        }

        for tube in removed {
            self.watched.remove(&tube);
            commands.push(Command::Ignore { tube });
        }

        Ok(commands)
    }
}

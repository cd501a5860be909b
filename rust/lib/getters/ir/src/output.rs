//! Output IR — generated sources registered with the host.

use serde::{Deserialize, Serialize};

/// One generated text fragment and the name it is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSource {
    /// Registration name (e.g. `Player.Getters.g.cs`). Re-registering a name replaces it.
    pub name: String,
    pub text: String,
}

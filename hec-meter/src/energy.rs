use serde::{Deserialize, Serialize};
use std::fmt;

/// The metered energy carriers of a household.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Electricity,
    Gas,
}

impl Energy {
    pub const ALL: [Energy; 2] = [Energy::Electricity, Energy::Gas];

    pub fn name(&self) -> &'static str {
        match self {
            Energy::Electricity => "electricity",
            Energy::Gas => "gas",
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

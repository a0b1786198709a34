//! Transfer step definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// One named stage of a transfer execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TransferStep {
    Init,
    OnRamp,
    Escrow,
    Bridge,
    OffRamp,
    Complete,
}

impl TransferStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStep::Init => "init",
            TransferStep::OnRamp => "on-ramp",
            TransferStep::Escrow => "escrow",
            TransferStep::Bridge => "bridge",
            TransferStep::OffRamp => "off-ramp",
            TransferStep::Complete => "complete",
        }
    }

    /// Short label as shown on the execution progress card.
    pub fn label(&self) -> &'static str {
        match self {
            TransferStep::Init => "Initializing transfer",
            TransferStep::OnRamp => "On-ramp processing",
            TransferStep::Escrow => "Escrow verification",
            TransferStep::Bridge => "Stellar bridge",
            TransferStep::OffRamp => "Off-ramp settlement",
            TransferStep::Complete => "Transfer complete",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TransferStep::Init => "Connecting to anchors...",
            TransferStep::OnRamp => "Depositing funds via origin anchor...",
            TransferStep::Escrow => "Securing funds in programmatic escrow...",
            TransferStep::Bridge => "Transferring via Stellar network...",
            TransferStep::OffRamp => "Delivering to destination anchor...",
            TransferStep::Complete => "Funds delivered successfully",
        }
    }

    /// The ordered step sequence for a route, with or without the optional
    /// escrow hold.
    pub fn steps_for(escrow: bool) -> Vec<TransferStep> {
        let mut steps = vec![TransferStep::Init, TransferStep::OnRamp];
        if escrow {
            steps.push(TransferStep::Escrow);
        }
        steps.push(TransferStep::Bridge);
        steps.push(TransferStep::OffRamp);
        steps.push(TransferStep::Complete);
        steps
    }
}

impl fmt::Display for TransferStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

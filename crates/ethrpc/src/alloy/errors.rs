use alloy::{contract::Error as ContractError, transports::RpcError};

/// Where a failed contract interaction went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The node could not be reached or failed to process the request.
    Node,
    /// The node processed the request and the contract rejected it.
    Contract,
}

pub trait ContractErrorExt {
    fn failure(&self) -> Failure;
}

impl ContractErrorExt for ContractError {
    fn failure(&self) -> Failure {
        match self {
            // Reverts surface as RPC error responses. An error response with
            // revert data (even empty revert data) came from the contract.
            ContractError::TransportError(RpcError::ErrorResp(err)) => {
                if err.as_revert_data().is_some() {
                    Failure::Contract
                } else {
                    Failure::Node
                }
            }
            ContractError::TransportError(_) | ContractError::PendingTransactionError(_) => {
                Failure::Node
            }
            _ => Failure::Contract,
        }
    }
}

//! In-memory JSON-RPC transport that answers every call by method name.
//!
//! Unlike alloy's `Asserter`, responses do not depend on the order in which
//! the provider's fillers and receipt polling issue their requests, which
//! makes a whole send-and-confirm round trip testable without a node.
use {
    crate::AlloyProvider,
    alloy::{
        network::{EthereumWallet, TxSigner},
        primitives::Signature,
        providers::{Provider, ProviderBuilder},
        rpc::{
            client::RpcClient,
            json_rpc::{
                ErrorPayload,
                RequestPacket,
                Response,
                ResponsePacket,
                ResponsePayload,
                SerializedRequest,
            },
        },
        transports::TransportError,
    },
    serde_json::Value,
    std::{
        collections::HashMap,
        pin::Pin,
        sync::{Arc, Mutex},
        task::{Context, Poll},
    },
    tower::Service,
};

#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    responses: HashMap<String, Value>,
    calls: Vec<(String, Value)>,
}

impl FakeNode {
    /// Answers every future `method` call with `result`.
    pub fn respond(&self, method: &str, result: Value) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(method.to_owned(), result);
    }

    /// Parameters of every `method` call received so far, oldest first.
    pub fn calls(&self, method: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|(name, _)| name == method)
            .map(|(_, params)| params.clone())
            .collect()
    }

    /// Provider that fills, signs and sends transactions from `signer`
    /// through this node.
    pub fn provider(
        &self,
        signer: impl TxSigner<Signature> + Send + Sync + 'static,
    ) -> AlloyProvider {
        ProviderBuilder::new()
            .wallet(EthereumWallet::new(signer))
            .connect_client(RpcClient::new(self.clone(), true))
            .erased()
    }

    fn answer(&self, request: &SerializedRequest) -> Result<Response, TransportError> {
        let params = match request.params() {
            Some(params) => serde_json::from_str(params.get())
                .map_err(|err| TransportError::deser_err(err, params.get()))?,
            None => Value::Null,
        };
        let mut state = self.state.lock().unwrap();
        state.calls.push((request.method().to_owned(), params));

        let payload = match state.responses.get(request.method()) {
            Some(result) => ResponsePayload::Success(
                serde_json::value::to_raw_value(result).map_err(TransportError::ser_err)?,
            ),
            None => {
                tracing::trace!(method = request.method(), "no canned response");
                ResponsePayload::Failure(ErrorPayload::internal_error())
            }
        };
        Ok(Response {
            id: request.id().clone(),
            payload,
        })
    }
}

impl Service<RequestPacket> for FakeNode {
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = ResponsePacket;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, packet: RequestPacket) -> Self::Future {
        let response = match packet {
            RequestPacket::Single(request) => self.answer(&request).map(ResponsePacket::Single),
            RequestPacket::Batch(requests) => requests
                .iter()
                .map(|request| self.answer(request))
                .collect::<Result<_, _>>()
                .map(ResponsePacket::Batch),
        };
        Box::pin(async move { response })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::signers::local::PrivateKeySigner, serde_json::json};

    #[tokio::test]
    async fn answers_by_method_and_records_calls() {
        let node = FakeNode::default();
        node.respond("eth_chainId", json!("0x7a69"));
        let signer: PrivateKeySigner =
            "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d"
                .parse()
                .unwrap();
        let provider = node.provider(signer);

        assert_eq!(provider.get_chain_id().await.unwrap(), 31337);
        assert!(provider.get_block_number().await.is_err());
        assert_eq!(node.calls("eth_chainId").len(), 1);
        assert_eq!(node.calls("eth_blockNumber").len(), 1);
    }
}

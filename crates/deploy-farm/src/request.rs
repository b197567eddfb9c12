//! Constructor parameters of the staking farm.

use {
    alloy::primitives::{Address, U256, address},
    contracts::alloy::ShoefyFarm,
};

/// Rinkeby testnet SHOE token.
pub const SHOE_TOKEN: Address = address!("0x8F973d1C33194fe773e7b9242340C3fdB2453b49");
/// Rinkeby testnet SHOE NFT collection.
pub const SHOE_NFT: Address = address!("0xD6afeFc8107185dAC6d99F0cfb34B3D97ff938e7");
/// Account authorizing farm actions off-chain.
pub const SIGNER: Address = address!("0x6950B412620ebc79943739e57Aa9bc80f2aF89cA");

pub const CATEGORIES: [&str; 8] = [
    "common",
    "unique",
    "rare",
    "epic",
    "legendary",
    "mythic-god",
    "mythic-devil",
    "mythic-alien",
];

const NFTS_PER_CATEGORY: u64 = 100;
const FARM_TIME: u64 = 1000;
/// 0.1 SHOE with 18 decimals.
const TOKENS_REQUIRED: &str = "100000000000000000";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("{field} has {actual} entries but there are {expected} categories")]
    Misaligned {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{field}[{index}] is not a token amount: {value:?}")]
    InvalidAmount {
        field: &'static str,
        index: usize,
        value: String,
    },
}

/// Everything passed to the farm constructor. All per-category vectors are
/// indexed like `categories`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub shoe_token: Address,
    pub shoe_nft: Address,
    pub categories: Vec<String>,
    pub total_general_nfts: Vec<u64>,
    pub total_rapid_nfts: Vec<u64>,
    pub general_farm_times: Vec<u64>,
    pub rapid_farm_times: Vec<u64>,
    /// Token amounts as decimal or `0x` prefixed hex strings.
    pub general_tokens_required: Vec<String>,
    pub rapid_tokens_required: Vec<String>,
    pub signer: Address,
}

impl DeploymentRequest {
    /// The farm as deployed to Rinkeby: every category gets the same caps,
    /// farm times and token requirements.
    pub fn rinkeby() -> Self {
        let n = CATEGORIES.len();
        Self {
            shoe_token: SHOE_TOKEN,
            shoe_nft: SHOE_NFT,
            categories: CATEGORIES.iter().map(ToString::to_string).collect(),
            total_general_nfts: vec![NFTS_PER_CATEGORY; n],
            total_rapid_nfts: vec![NFTS_PER_CATEGORY; n],
            general_farm_times: vec![FARM_TIME; n],
            rapid_farm_times: vec![FARM_TIME; n],
            general_tokens_required: vec![TOKENS_REQUIRED.to_string(); n],
            rapid_tokens_required: vec![TOKENS_REQUIRED.to_string(); n],
            signer: SIGNER,
        }
    }

    /// Returns the number of categories if every per-category vector has
    /// exactly one entry per category.
    pub fn check_alignment(&self) -> Result<usize, RequestError> {
        let expected = self.categories.len();
        let fields = [
            ("total_general_nfts", self.total_general_nfts.len()),
            ("total_rapid_nfts", self.total_rapid_nfts.len()),
            ("general_farm_times", self.general_farm_times.len()),
            ("rapid_farm_times", self.rapid_farm_times.len()),
            ("general_tokens_required", self.general_tokens_required.len()),
            ("rapid_tokens_required", self.rapid_tokens_required.len()),
        ];
        match fields.into_iter().find(|(_, actual)| *actual != expected) {
            Some((field, actual)) => Err(RequestError::Misaligned {
                field,
                expected,
                actual,
            }),
            None => Ok(expected),
        }
    }

    /// Typed constructor call in parameter order.
    pub fn constructor(&self) -> Result<ShoefyFarm::Constructor, RequestError> {
        self.check_alignment()?;
        Ok(ShoefyFarm::Constructor {
            shoeToken_: self.shoe_token,
            shoeNFT_: self.shoe_nft,
            categories_: self.categories.clone(),
            totalGeneralNFTs_: to_u256(&self.total_general_nfts),
            totalRapidNFTs_: to_u256(&self.total_rapid_nfts),
            generalFarmTimes_: to_u256(&self.general_farm_times),
            rapidFarmTimes_: to_u256(&self.rapid_farm_times),
            generalTokensRequired_: parse_amounts(
                "general_tokens_required",
                &self.general_tokens_required,
            )?,
            rapidTokensRequired_: parse_amounts(
                "rapid_tokens_required",
                &self.rapid_tokens_required,
            )?,
            signerAddress_: self.signer,
        })
    }
}

fn to_u256(values: &[u64]) -> Vec<U256> {
    values.iter().copied().map(U256::from).collect()
}

fn parse_amounts(field: &'static str, values: &[String]) -> Result<Vec<U256>, RequestError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .parse::<U256>()
                .map_err(|_| RequestError::InvalidAmount {
                    field,
                    index,
                    value: value.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_categories() -> DeploymentRequest {
        DeploymentRequest {
            categories: vec!["common".into(), "unique".into()],
            total_general_nfts: vec![100, 100],
            total_rapid_nfts: vec![100, 100],
            general_farm_times: vec![1000, 1000],
            rapid_farm_times: vec![1000, 1000],
            general_tokens_required: vec!["1".into(), "1".into()],
            rapid_tokens_required: vec!["1".into(), "1".into()],
            ..DeploymentRequest::rinkeby()
        }
    }

    #[test]
    fn rinkeby_request_is_aligned() {
        let request = DeploymentRequest::rinkeby();

        assert_eq!(request.check_alignment(), Ok(8));
        assert_eq!(request.categories[5], "mythic-god");

        let constructor = request.constructor().unwrap();
        assert_eq!(constructor.shoeToken_, SHOE_TOKEN);
        assert_eq!(constructor.shoeNFT_, SHOE_NFT);
        assert_eq!(constructor.signerAddress_, SIGNER);
        assert_eq!(
            constructor.generalTokensRequired_,
            vec![U256::from(100_000_000_000_000_000u64); 8]
        );
    }

    #[test]
    fn constructor_carries_one_entry_per_category() {
        let constructor = two_categories().constructor().unwrap();

        for len in [
            constructor.categories_.len(),
            constructor.totalGeneralNFTs_.len(),
            constructor.totalRapidNFTs_.len(),
            constructor.generalFarmTimes_.len(),
            constructor.rapidFarmTimes_.len(),
            constructor.generalTokensRequired_.len(),
            constructor.rapidTokensRequired_.len(),
        ] {
            assert_eq!(len, 2);
        }
        assert_eq!(constructor.rapidFarmTimes_, vec![U256::from(1000); 2]);
        assert_eq!(constructor.rapidTokensRequired_, vec![U256::from(1); 2]);
    }

    #[test]
    fn misaligned_arrays_are_rejected() {
        let mut request = two_categories();
        request.rapid_farm_times.push(1000);

        let expected = RequestError::Misaligned {
            field: "rapid_farm_times",
            expected: 2,
            actual: 3,
        };
        assert_eq!(request.check_alignment(), Err(expected.clone()));
        assert_eq!(request.constructor().err(), Some(expected));
    }

    #[test]
    fn empty_request_is_aligned() {
        let request = DeploymentRequest {
            categories: vec![],
            total_general_nfts: vec![],
            total_rapid_nfts: vec![],
            general_farm_times: vec![],
            rapid_farm_times: vec![],
            general_tokens_required: vec![],
            rapid_tokens_required: vec![],
            ..DeploymentRequest::rinkeby()
        };

        assert_eq!(request.check_alignment(), Ok(0));
    }

    #[test]
    fn token_amounts_accept_hex() {
        let mut request = two_categories();
        request.general_tokens_required[1] = "0x16345785d8a0000".into();

        let constructor = request.constructor().unwrap();
        assert_eq!(
            constructor.generalTokensRequired_[1],
            U256::from(100_000_000_000_000_000u64)
        );
    }

    #[test]
    fn invalid_token_amount_is_rejected() {
        let mut request = two_categories();
        request.rapid_tokens_required[1] = "0.1".into();

        assert_eq!(
            request.constructor().err(),
            Some(RequestError::InvalidAmount {
                field: "rapid_tokens_required",
                index: 1,
                value: "0.1".into(),
            })
        );
    }
}

//! Typed bindings for the contracts deployed from this workspace.

#[allow(non_snake_case)]
pub mod ShoefyFarm {
    alloy::sol!(
        #[allow(missing_docs)]
        #[sol(all_derives)]
        contract ShoefyFarm {
            constructor(
                address shoeToken_,
                address shoeNFT_,
                string[] memory categories_,
                uint256[] memory totalGeneralNFTs_,
                uint256[] memory totalRapidNFTs_,
                uint256[] memory generalFarmTimes_,
                uint256[] memory rapidFarmTimes_,
                uint256[] memory generalTokensRequired_,
                uint256[] memory rapidTokensRequired_,
                address signerAddress_
            );
        }
    );

    pub use self::ShoefyFarm::constructorCall as Constructor;

    /// Canonical types of the constructor inputs. An artifact has to declare
    /// exactly these to be deployable through [`Constructor`].
    pub const CONSTRUCTOR_INPUTS: [&str; 10] = [
        "address",
        "address",
        "string[]",
        "uint256[]",
        "uint256[]",
        "uint256[]",
        "uint256[]",
        "uint256[]",
        "uint256[]",
        "address",
    ];
}

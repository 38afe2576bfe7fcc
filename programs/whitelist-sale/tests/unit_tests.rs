use anchor_lang::prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::Id;
    use anchor_spl::metadata::Metadata;
    use whitelist_sale::{constants::*, pda};

    #[test]
    fn test_pda_derivation() {
        let program_id = whitelist_sale::id();

        let (mint, mint_bump) = Pubkey::find_program_address(&[b"mint"], &program_id);
        let (whitelist, whitelist_bump) =
            Pubkey::find_program_address(&[b"whitelist"], &program_id);
        let (config, config_bump) = Pubkey::find_program_address(&[b"config"], &program_id);

        assert_eq!(pda::find_mint_address().unwrap(), (mint, mint_bump));
        assert_eq!(pda::find_whitelist_address().unwrap(), (whitelist, whitelist_bump));
        assert_eq!(pda::find_config_address().unwrap(), (config, config_bump));

        assert_ne!(mint, whitelist);
        assert_ne!(mint, config);
        assert_ne!(whitelist, config);
    }

    #[test]
    fn test_pda_derivation_is_deterministic() {
        let first = pda::SaleAddresses::derive().unwrap();
        let second = pda::SaleAddresses::derive().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pdas_match_create_program_address() {
        let program_id = whitelist_sale::id();
        let addresses = pda::SaleAddresses::derive().unwrap();

        let mint =
            Pubkey::create_program_address(&[MINT_SEED, &[addresses.mint_bump]], &program_id)
                .unwrap();
        let whitelist = Pubkey::create_program_address(
            &[WHITELIST_SEED, &[addresses.whitelist_bump]],
            &program_id,
        )
        .unwrap();
        let config =
            Pubkey::create_program_address(&[CONFIG_SEED, &[addresses.config_bump]], &program_id)
                .unwrap();

        assert_eq!(mint, addresses.mint);
        assert_eq!(whitelist, addresses.whitelist);
        assert_eq!(config, addresses.config);
    }

    #[test]
    fn test_metadata_address_uses_metaplex_layout() {
        let metadata_program = Metadata::id();
        let (mint, _) = pda::find_mint_address().unwrap();

        let (expected, _) = Pubkey::find_program_address(
            &[b"metadata", metadata_program.as_ref(), mint.as_ref()],
            &metadata_program,
        );

        assert_eq!(pda::find_metadata_address(&mint).unwrap().0, expected);
        assert_eq!(pda::SaleAddresses::derive().unwrap().metadata, expected);
    }

    #[test]
    fn test_matches_seed_with_stored_bump() {
        let (whitelist, bump) = pda::find_whitelist_address().unwrap();

        assert!(pda::matches_seed(&whitelist, WHITELIST_SEED, bump));
        assert!(!pda::matches_seed(&whitelist, CONFIG_SEED, bump));
        assert!(!pda::matches_seed(&Pubkey::new_unique(), WHITELIST_SEED, bump));
    }

    #[test]
    fn test_matches_seed_rejects_non_canonical_bump() {
        let (config, bump) = pda::find_config_address().unwrap();

        // Other bumps either land on the curve or produce a different address
        for other in (0..=u8::MAX).filter(|b| *b != bump) {
            assert!(!pda::matches_seed(&config, CONFIG_SEED, other));
        }
    }
}

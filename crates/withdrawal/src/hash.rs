use crate::types::{WithdrawalHash, WithdrawalTransaction};
use alloy_primitives::keccak256;
use alloy_sol_types::SolValue;

/// Content hash of a withdrawal transaction.
///
/// `keccak256(abi.encode(nonce, sender, target, value, gasLimit, data))`,
/// encoded as a field sequence without a tuple-head offset so the hash
/// matches the record written on the derived ledger.
pub fn hash_withdrawal(tx: &WithdrawalTransaction) -> WithdrawalHash {
    let encoded = (
        &tx.nonce,
        &tx.sender,
        &tx.target,
        &tx.value,
        &tx.gas_limit,
        &tx.data,
    )
        .abi_encode_sequence();

    keccak256(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{hex, Address, Bytes, B256, U256};

    #[test]
    fn test_hash_withdrawal_deterministic() {
        let tx = WithdrawalTransaction {
            nonce: U256::from(1),
            sender: Address::from([0x01; 20]),
            target: Address::from([0x02; 20]),
            value: U256::from(1_000_000),
            gas_limit: U256::from(100_000),
            data: Bytes::from(vec![0xaa, 0xbb, 0xcc]),
        };

        let hash1 = hash_withdrawal(&tx);
        let hash2 = hash_withdrawal(&tx);

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, B256::ZERO);
    }

    #[test]
    fn test_hash_withdrawal_known_value() {
        // Real withdrawal from Unichain Mainnet
        // TX: 0x91b374b5403401198a892f62db8843b60125cfb3e28ec1664089d9158424dc4a
        // Block: 23969114

        let tx = WithdrawalTransaction {
            nonce: U256::from_be_bytes(
                hex!("0001000000000000000000000000000000000000000000000000000000000818")
            ),
            sender: Address::from_slice(
                &hex!("000040D6c85A13a1AA74565FDe87e499dC023C6f")
            ),
            target: Address::from_slice(
                &hex!("B03eEF386A61b5b462051636001485FFfdD3d843")
            ),
            value: U256::ZERO,
            gas_limit: U256::from(200_000), // 0x30d40
            data: Bytes::from(hex!(
                "095ea7b3000000000000000000000000000040d6c85a13a1aa74565fde87e499dc023c6fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            )),
        };

        let hash = hash_withdrawal(&tx);

        // Expected hash from the record emitted on the derived ledger
        let expected = B256::from_slice(&hex!(
            "49c43b60ec99e99046b54aec4c90419ff194300e567de63423c3b974ae46bd28"
        ));

        assert_eq!(hash, expected, "Hash mismatch!");
    }

    #[test]
    fn test_hash_withdrawal_collision_resistance() {
        // Similar but distinct transactions must produce distinct hashes.
        let mut hashes = std::collections::HashSet::new();

        for i in 100..110 {
            let tx = WithdrawalTransaction {
                nonce: U256::from(i),
                sender: Address::from([0x01; 20]),
                target: Address::from([0x02; 20]),
                value: U256::from(1_000_000),
                gas_limit: U256::from(100_000),
                data: Bytes::new(),
            };

            assert!(hashes.insert(hash_withdrawal(&tx)), "Hash collision detected!");
        }

        assert_eq!(hashes.len(), 10);
    }

    #[test]
    fn test_identical_fields_collide_intentionally() {
        let tx = WithdrawalTransaction {
            nonce: U256::from(7),
            sender: Address::from([0x03; 20]),
            target: Address::from([0x04; 20]),
            value: U256::ZERO,
            gas_limit: U256::from(21_000),
            data: Bytes::new(),
        };

        assert_eq!(hash_withdrawal(&tx), hash_withdrawal(&tx.clone()));
    }
}

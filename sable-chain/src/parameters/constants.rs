//! Consensus constants shared by every Sable network.

/// The number of base units in one coin.
pub const COIN: u64 = 100_000_000;

/// One hundredth of a coin, in base units.
pub const CENT: u64 = COIN / 100;

/// The RSA group modulus for the zerocoin accumulator setup, as a decimal
/// digit string.
///
/// Every network uses the same modulus; trust in it rests on the fact that
/// no factorization is publicly known. Accumulator values and spend proofs
/// are computed in the group this modulus defines, so it must never change
/// for a running network.
pub const ZEROCOIN_MODULUS: &str =
    "25195908475657893494027183240048398571429282126204032027777137836043662020707595556264018525880784\
     4069182906412495150821892985591491761845028084891200728449926873928072877767359714183472702618963750149718246911\
     6507761337985909570009733045974880842840179742910064245869181719511874612151517265463228221686998754918242243363\
     7259085141865462043576798423387184774447920739934236584823824281198163815010674810451660377306056201619676256133\
     8441436038339044149526344321901146575444541784240209246165157233507787077498171257724679629263863563732899121548\
     31438167899885040445364023527381951378636564391212010397122822120720357";

#[cfg(test)]
mod tests {
    use super::*;

    use crate::zerocoin::AccumulatorValue;

    #[test]
    fn zerocoin_modulus_parses() {
        sable_test::init();

        let modulus = AccumulatorValue::from_decimal_str(ZEROCOIN_MODULUS)
            .expect("hard-coded zerocoin modulus parses");
        assert!(!modulus.is_zero());
    }
}

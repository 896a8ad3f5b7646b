//! Request encoding: parameters to query line.

use crate::core_spec::{CoreSpec, ModifierCode};
use crate::params::GenerationParameters;

/// Encode parameters into the query line sent to the generator.
///
/// Tokens appear in fixed order: `upg`, `f`, `rs`, then `core` only when a
/// core is requested. Pure: equal parameters encode to equal strings.
pub fn encode_query(params: &GenerationParameters) -> String {
    let mut query = format!(
        "upg={} f={} rs={}",
        params.upgrades.wire_form(),
        params.floors,
        params.budget
    );

    if let Some(core) = &params.core {
        query.push_str(" core=");
        query.push_str(&encode_core(core));
    }

    query
}

/// Core token value: the tier number plus one `/CODE:magnitude` segment per
/// non-zero modifier, in canonical code order.
fn encode_core(core: &CoreSpec) -> String {
    let mut value = core.tier.index().to_string();
    for code in ModifierCode::ALL {
        let magnitude = core.magnitude_of(code);
        if magnitude > 0 {
            value.push_str(&format!("/{}:{}", code.letter(), magnitude));
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_spec::Tier;
    use crate::params::UpgradeLevels;

    #[test]
    fn plain_query_has_no_core_token() {
        let params = GenerationParameters::new(5, 100);
        insta::assert_snapshot!(encode_query(&params), @"upg=0000 f=5 rs=100");
    }

    #[test]
    fn core_token_lists_nonzero_modifiers() {
        let mut params = GenerationParameters::new(10, 500);
        params.core = Some(
            CoreSpec::new(Tier::Rare)
                .with_modifier(ModifierCode::Fire, 10)
                .with_modifier(ModifierCode::Runestones, 5),
        );
        insta::assert_snapshot!(encode_query(&params), @"upg=0000 f=10 rs=500 core=3/F:10/R:5");
    }

    #[test]
    fn modifiers_emit_in_canonical_order() {
        // insertion order does not matter; F still comes before R
        let mut params = GenerationParameters::new(1, 0);
        params.core = Some(
            CoreSpec::new(Tier::Common)
                .with_modifier(ModifierCode::Runestones, 5)
                .with_modifier(ModifierCode::Fire, 10),
        );
        insta::assert_snapshot!(encode_query(&params), @"upg=0000 f=1 rs=0 core=1/F:10/R:5");
    }

    #[test]
    fn zero_magnitude_modifiers_are_omitted() {
        let mut params = GenerationParameters::new(1, 0);
        params.core = Some(
            CoreSpec::new(Tier::Ethereal)
                .with_modifier(ModifierCode::Poison, 0)
                .with_modifier(ModifierCode::Strength, 40),
        );
        insta::assert_snapshot!(encode_query(&params), @"upg=0000 f=1 rs=0 core=7/S:40");
    }

    #[test]
    fn core_with_no_modifiers_is_just_the_tier() {
        let mut params = GenerationParameters::new(2, 50);
        params.core = Some(CoreSpec::new(Tier::Uncommon));
        insta::assert_snapshot!(encode_query(&params), @"upg=0000 f=2 rs=50 core=2");
    }

    #[test]
    fn upgrade_levels_fill_the_upg_token() {
        let mut params = GenerationParameters::new(5, 100);
        params.upgrades = UpgradeLevels::new(2, 0, 11, 9);
        insta::assert_snapshot!(encode_query(&params), @"upg=20b9 f=5 rs=100");
    }

    #[test]
    fn encoding_is_pure() {
        let mut params = GenerationParameters::new(8, 1234);
        params.core = Some(CoreSpec::new(Tier::Legendary).with_modifier(ModifierCode::Condenser, 30));
        assert_eq!(encode_query(&params), encode_query(&params));
    }
}

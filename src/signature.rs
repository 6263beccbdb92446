//! Class signatures.
//!
//! A class name is `CLASS_` followed by up to 14 signature characters. Each
//! position encodes one feature of the problems in the class; `-` leaves the
//! position unconstrained. Generated dispatch code tests a problem's
//! features with one `Spec<Feature>(spec)` predicate per constrained
//! position.

use crate::error::{Error, Result};
use crate::ingest::CLASS_PREFIX;

macro_rules! features {
    ($($variant:ident,)+) => {
        /// A single classification feature.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Feature {
            $($variant,)+
        }

        impl Feature {
            /// Feature name as used in predicate identifiers.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

features! {
    IsFO, IsHO,
    AxiomsAreUnit, AxiomsAreNonUnitHorn, AxiomsAreGeneral,
    GoalsAreUnit, GoalsAreHorn, GoalsAreGeneral,
    NoEq, SomeEq, PureEq,
    FewNGPosUnits, SomeNGPosUnits, ManyNGPosUnits,
    GoalsHaveVars, GoalsAreGround,
    FewAxioms, SomeAxioms, ManyAxioms,
    FewLiterals, SomeLiterals, ManyLiterals,
    SmallTerms, MediumTerms, LargeTerms,
    FewGroundPos, SomeGroundPos, ManyGroundPos,
    MaxFArity0, MaxFArity1, MaxFArity2, MaxFArity3Plus,
    AvgFArity0, AvgFArity1, AvgFArity2, AvgFArity3Plus,
    SmallFArSum, MediumFArSum, LargeFArSum,
    ShallowMaxDepth, MediumMaxDepth, DeepMaxDepth,
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Spec{}(spec)", self.name())
    }
}

/// Character marking an unconstrained position.
pub const UNCONSTRAINED: char = '-';

use Feature::*;

/// Feature alphabet of every signature position.
const POSITIONS: [&[(char, Feature)]; 14] = [
    &[('F', IsFO), ('H', IsHO)],
    &[('U', AxiomsAreUnit), ('H', AxiomsAreNonUnitHorn), ('G', AxiomsAreGeneral)],
    &[('U', GoalsAreUnit), ('H', GoalsAreHorn), ('G', GoalsAreGeneral)],
    &[('N', NoEq), ('S', SomeEq), ('P', PureEq)],
    &[('F', FewNGPosUnits), ('S', SomeNGPosUnits), ('M', ManyNGPosUnits)],
    &[('N', GoalsHaveVars), ('G', GoalsAreGround)],
    &[('F', FewAxioms), ('S', SomeAxioms), ('M', ManyAxioms)],
    &[('F', FewLiterals), ('S', SomeLiterals), ('M', ManyLiterals)],
    &[('S', SmallTerms), ('M', MediumTerms), ('L', LargeTerms)],
    &[('F', FewGroundPos), ('S', SomeGroundPos), ('M', ManyGroundPos)],
    &[('0', MaxFArity0), ('1', MaxFArity1), ('2', MaxFArity2), ('3', MaxFArity3Plus)],
    &[('0', AvgFArity0), ('1', AvgFArity1), ('2', AvgFArity2), ('3', AvgFArity3Plus)],
    &[('S', SmallFArSum), ('M', MediumFArSum), ('L', LargeFArSum)],
    &[('S', ShallowMaxDepth), ('M', MediumMaxDepth), ('D', DeepMaxDepth)],
];

/// Parsed signature of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSignature {
    code: String,
    features: Vec<Feature>,
}

impl ClassSignature {
    /// Parse the signature of a `CLASS_...` name.
    pub fn parse(class: &str) -> Result<Self> {
        let code = class
            .strip_prefix(CLASS_PREFIX)
            .ok_or_else(|| Error::invalid_signature(class, "missing class prefix"))?;

        let length = code.chars().count();
        if length > POSITIONS.len() {
            return Err(Error::invalid_signature(
                class,
                format!("{} positions, at most {} allowed", length, POSITIONS.len()),
            ));
        }

        let mut features = Vec::new();
        for (position, (ch, alphabet)) in code.chars().zip(POSITIONS).enumerate() {
            if ch == UNCONSTRAINED {
                continue;
            }
            let feature = alphabet
                .iter()
                .find(|(symbol, _)| *symbol == ch)
                .map(|(_, feature)| *feature)
                .ok_or_else(|| {
                    Error::invalid_signature(
                        class,
                        format!("unknown character '{}' at position {}", ch, position),
                    )
                })?;
            features.push(feature);
        }

        Ok(Self {
            code: code.to_string(),
            features,
        })
    }

    /// Signature characters without the class prefix.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Constrained features, in position order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Whether every position is unconstrained.
    pub fn is_unconstrained(&self) -> bool {
        self.features.is_empty()
    }
}

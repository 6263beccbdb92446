//! Closed option tables for strategy descriptions.
//!
//! Every option that takes a named argument maps a command-line code to the
//! identifier the prover's source uses for it. Unknown codes are rejected
//! with [`Error::UnknownCode`] rather than passed through.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Declare a closed code table: `Variant => "code" => "CIdentifier"`.
macro_rules! option_codes {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($table:literal) {
            $($variant:ident => $code:literal => $ident:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every variant, in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Command-line code of this variant.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Identifier used in generated code.
            pub fn c_ident(&self) -> &'static str {
                match self {
                    $(Self::$variant => $ident,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(code: &str) -> Result<Self> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(Error::unknown_code($table, code)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.c_ident())
            }
        }
    };
}

option_codes! {
    /// Literal selection strategy (`-W`, `--literal-selection-strategy=`).
    pub enum LiteralSelection ("literal selection") {
        NoSelection => "NoSelection" => "SelectNoLiterals",
        NoGeneration => "NoGeneration" => "SelectNoGeneration",
        SelectNegativeLiterals => "SelectNegativeLiterals" => "SelectNegativeLiterals",
        PSelectNegativeLiterals => "PSelectNegativeLiterals" => "PSelectNegativeLiterals",
        SelectPureVarNegLiterals => "SelectPureVarNegLiterals" => "SelectFirstVariableLiteral",
        PSelectPureVarNegLiterals => "PSelectPureVarNegLiterals" => "PSelectFirstVariableLiteral",
        SelectLargestNegLit => "SelectLargestNegLit" => "SelectLargestNegativeLiteral",
        PSelectLargestNegLit => "PSelectLargestNegLit" => "PSelectLargestNegativeLiteral",
        SelectSmallestNegLit => "SelectSmallestNegLit" => "SelectSmallestNegativeLiteral",
        PSelectSmallestNegLit => "PSelectSmallestNegLit" => "PSelectSmallestNegativeLiteral",
        SelectLargestOrientable => "SelectLargestOrientable" => "SelectLargestOrientableLiteral",
        PSelectLargestOrientable => "PSelectLargestOrientable" => "PSelectLargestOrientableLiteral",
        MSelectLargestOrientable => "MSelectLargestOrientable" => "MSelectLargestOrientableLiteral",
        SelectSmallestOrientable => "SelectSmallestOrientable" => "SelectSmallestOrientableLiteral",
        PSelectSmallestOrientable => "PSelectSmallestOrientable" => "PSelectSmallestOrientableLiteral",
        MSelectSmallestOrientable => "MSelectSmallestOrientable" => "MSelectSmallestOrientableLiteral",
        SelectDiffNegLit => "SelectDiffNegLit" => "SelectDiffNegativeLiteral",
        PSelectDiffNegLit => "PSelectDiffNegLit" => "PSelectDiffNegativeLiteral",
        SelectGroundNegLit => "SelectGroundNegLit" => "SelectGroundNegativeLiteral",
        PSelectGroundNegLit => "PSelectGroundNegLit" => "PSelectGroundNegativeLiteral",
        SelectOptimalLit => "SelectOptimalLit" => "SelectOptimalLiteral",
        PSelectOptimalLit => "PSelectOptimalLit" => "PSelectOptimalLiteral",
        SelectMinOptimalLit => "SelectMinOptimalLit" => "SelectMinOptimalLiteral",
        PSelectMinOptimalLit => "PSelectMinOptimalLit" => "PSelectMinOptimalLiteral",
        SelectMinOptimalNoTypePred => "SelectMinOptimalNoTypePred" => "SelectMinOptimalNoTypePred",
        PSelectMinOptimalNoTypePred => "PSelectMinOptimalNoTypePred" => "PSelectMinOptimalNoTypePred",
        SelectMinOptimalNoXTypePred => "SelectMinOptimalNoXTypePred" => "SelectMinOptimalNoXTypePred",
        PSelectMinOptimalNoXTypePred => "PSelectMinOptimalNoXTypePred" => "PSelectMinOptimalNoXTypePred",
        SelectMinOptimalNoRXTypePred => "SelectMinOptimalNoRXTypePred" => "SelectMinOptimalNoRXTypePred",
        PSelectMinOptimalNoRXTypePred => "PSelectMinOptimalNoRXTypePred" => "PSelectMinOptimalNoRXTypePred",
        SelectCondOptimalLit => "SelectCondOptimalLit" => "SelectCondOptimalLiteral",
        PSelectCondOptimalLit => "PSelectCondOptimalLit" => "PSelectCondOptimalLiteral",
        SelectAllCondOptimalLit => "SelectAllCondOptimalLit" => "SelectAllCondOptimalLiteral",
        PSelectAllCondOptimalLit => "PSelectAllCondOptimalLit" => "PSelectAllCondOptimalLiteral",
        SelectOptimalRestrDepth2 => "SelectOptimalRestrDepth2" => "SelectDepth2OptimalLiteral",
        PSelectOptimalRestrDepth2 => "PSelectOptimalRestrDepth2" => "PSelectDepth2OptimalLiteral",
        SelectOptimalRestrPDepth2 => "SelectOptimalRestrPDepth2" => "SelectPDepth2OptimalLiteral",
        PSelectOptimalRestrPDepth2 => "PSelectOptimalRestrPDepth2" => "PSelectPDepth2OptimalLiteral",
        SelectOptimalRestrNDepth2 => "SelectOptimalRestrNDepth2" => "SelectNDepth2OptimalLiteral",
        PSelectOptimalRestrNDepth2 => "PSelectOptimalRestrNDepth2" => "PSelectNDepth2OptimalLiteral",
        SelectNonRROptimalLit => "SelectNonRROptimalLit" => "SelectNonRROptimalLiteral",
        PSelectNonRROptimalLit => "PSelectNonRROptimalLit" => "PSelectNonRROptimalLiteral",
        SelectNonStrongRROptimalLit => "SelectNonStrongRROptimalLit" => "SelectNonStrongRROptimalLiteral",
        PSelectNonStrongRROptimalLit => "PSelectNonStrongRROptimalLit" => "PSelectNonStrongRROptimalLiteral",
        SelectAntiRROptimalLit => "SelectAntiRROptimalLit" => "SelectAntiRROptimalLiteral",
        PSelectAntiRROptimalLit => "PSelectAntiRROptimalLit" => "PSelectAntiRROptimalLiteral",
        SelectNonAntiRROptimalLit => "SelectNonAntiRROptimalLit" => "SelectNonAntiRROptimalLiteral",
        PSelectNonAntiRROptimalLit => "PSelectNonAntiRROptimalLit" => "PSelectNonAntiRROptimalLiteral",
        SelectStrongRRNonRROptimalLit => "SelectStrongRRNonRROptimalLit" => "SelectStrongRRNonRROptimalLiteral",
        PSelectStrongRRNonRROptimalLit => "PSelectStrongRRNonRROptimalLit" => "PSelectStrongRRNonRROptimalLiteral",
        SelectUnlessUniqMax => "SelectUnlessUniqMax" => "SelectUnlessUniqMaxOptimalLiteral",
        PSelectUnlessUniqMax => "PSelectUnlessUniqMax" => "PSelectUnlessUniqMaxOptimalLiteral",
        SelectUnlessPosMax => "SelectUnlessPosMax" => "SelectUnlessPosMaxOptimalLiteral",
        PSelectUnlessPosMax => "PSelectUnlessPosMax" => "PSelectUnlessPosMaxOptimalLiteral",
        SelectUnlessUniqPosMax => "SelectUnlessUniqPosMax" => "SelectUnlessUniqPosMaxOptimalLiteral",
        PSelectUnlessUniqPosMax => "PSelectUnlessUniqPosMax" => "PSelectUnlessUniqPosMaxOptimalLiteral",
        SelectUnlessUniqMaxPos => "SelectUnlessUniqMaxPos" => "SelectUnlessUniqMaxPosOptimalLiteral",
        PSelectUnlessUniqMaxPos => "PSelectUnlessUniqMaxPos" => "PSelectUnlessUniqMaxPosOptimalLiteral",
        SelectComplex => "SelectComplex" => "SelectComplex",
        PSelectComplex => "PSelectComplex" => "PSelectComplex",
        SelectComplexExceptRRHorn => "SelectComplexExceptRRHorn" => "SelectComplexExceptRRHorn",
        PSelectComplexExceptRRHorn => "PSelectComplexExceptRRHorn" => "PSelectComplexExceptRRHorn",
        SelectLComplex => "SelectLComplex" => "SelectLComplex",
        PSelectLComplex => "PSelectLComplex" => "PSelectLComplex",
        SelectMaxLComplex => "SelectMaxLComplex" => "SelectMaxLComplex",
        PSelectMaxLComplex => "PSelectMaxLComplex" => "PSelectMaxLComplex",
        SelectMaxLComplexNoTypePred => "SelectMaxLComplexNoTypePred" => "SelectMaxLComplexNoTypePred",
        PSelectMaxLComplexNoTypePred => "PSelectMaxLComplexNoTypePred" => "PSelectMaxLComplexNoTypePred",
        SelectMaxLComplexNoXTypePred => "SelectMaxLComplexNoXTypePred" => "SelectMaxLComplexNoXTypePred",
        PSelectMaxLComplexNoXTypePred => "PSelectMaxLComplexNoXTypePred" => "PSelectMaxLComplexNoXTypePred",
        SelectComplexPreferNEQ => "SelectComplexPreferNEQ" => "SelectComplexPreferNEQ",
        PSelectComplexPreferNEQ => "PSelectComplexPreferNEQ" => "PSelectComplexPreferNEQ",
        SelectComplexPreferEQ => "SelectComplexPreferEQ" => "SelectComplexPreferEQ",
        PSelectComplexPreferEQ => "PSelectComplexPreferEQ" => "PSelectComplexPreferEQ",
        SelectComplexExceptUniqMaxHorn => "SelectComplexExceptUniqMaxHorn" => "SelectComplexExceptUniqMaxHorn",
        PSelectComplexExceptUniqMaxHorn => "PSelectComplexExceptUniqMaxHorn" => "PSelectComplexExceptUniqMaxHorn",
        MSelectComplexExceptUniqMaxHorn => "MSelectComplexExceptUniqMaxHorn" => "MSelectComplexExceptUniqMaxHorn",
        SelectNewComplex => "SelectNewComplex" => "SelectNewComplex",
        PSelectNewComplex => "PSelectNewComplex" => "PSelectNewComplex",
        SelectNewComplexExceptUniqMaxHorn => "SelectNewComplexExceptUniqMaxHorn" => "SelectNewComplexExceptUniqMaxHorn",
        PSelectNewComplexExceptUniqMaxHorn => "PSelectNewComplexExceptUniqMaxHorn" => "PSelectNewComplexExceptUniqMaxHorn",
        SelectMinInfpos => "SelectMinInfpos" => "SelectMinInfpos",
        PSelectMinInfpos => "PSelectMinInfpos" => "PSelectMinInfpos",
        HSelectMinInfpos => "HSelectMinInfpos" => "HSelectMinInfpos",
        GSelectMinInfpos => "GSelectMinInfpos" => "GSelectMinInfpos",
        SelectMinInfposNoTypePred => "SelectMinInfposNoTypePred" => "SelectMinInfposNoTypePred",
        PSelectMinInfposNoTypePred => "PSelectMinInfposNoTypePred" => "PSelectMinInfposNoTypePred",
        SelectMin2Infpos => "SelectMin2Infpos" => "SelectMin2Infpos",
        PSelectMin2Infpos => "PSelectMin2Infpos" => "PSelectMin2Infpos",
        SelectComplexExceptUniqMaxPosHorn => "SelectComplexExceptUniqMaxPosHorn" => "SelectComplexExceptUniqMaxPosHorn",
        PSelectComplexExceptUniqMaxPosHorn => "PSelectComplexExceptUniqMaxPosHorn" => "PSelectComplexExceptUniqMaxPosHorn",
        SelectUnlessUniqMaxSmallestOrientable => "SelectUnlessUniqMaxSmallestOrientable" => "SelectUnlessUniqMaxSmallestOrientable",
        PSelectUnlessUniqMaxSmallestOrientable => "PSelectUnlessUniqMaxSmallestOrientable" => "PSelectUnlessUniqMaxSmallestOrientable",
        SelectDivLits => "SelectDivLits" => "SelectDiversificationLiterals",
        SelectDivPreferIntoLits => "SelectDivPreferIntoLits" => "SelectDiversificationPreferIntoLiterals",
        SelectMaxLComplexG => "SelectMaxLComplexG" => "SelectMaxLComplexG",
        SelectMaxLComplexAvoidPosPred => "SelectMaxLComplexAvoidPosPred" => "SelectMaxLComplexAvoidPosPred",
        SelectMaxLComplexAPPNTNp => "SelectMaxLComplexAPPNTNp" => "SelectMaxLComplexAPPNTNp",
        SelectMaxLComplexAvoidPosUPred => "SelectMaxLComplexAvoidPosUPred" => "SelectMaxLComplexAvoidPosUPred",
        SelectComplexG => "SelectComplexG" => "SelectComplexG",
        SelectComplexAHP => "SelectComplexAHP" => "SelectComplexAHP",
        PSelectComplexAHP => "PSelectComplexAHP" => "PSelectComplexAHP",
        SelectNewComplexAHP => "SelectNewComplexAHP" => "SelectNewComplexAHP",
        PSelectNewComplexAHP => "PSelectNewComplexAHP" => "PSelectNewComplexAHP",
        SelectComplexAHPExceptRRHorn => "SelectComplexAHPExceptRRHorn" => "SelectComplexAHPExceptRRHorn",
        PSelectComplexAHPExceptRRHorn => "PSelectComplexAHPExceptRRHorn" => "PSelectComplexAHPExceptRRHorn",
        SelectNewComplexAHPExceptRRHorn => "SelectNewComplexAHPExceptRRHorn" => "SelectNewComplexAHPExceptRRHorn",
        PSelectNewComplexAHPExceptRRHorn => "PSelectNewComplexAHPExceptRRHorn" => "PSelectNewComplexAHPExceptRRHorn",
        SelectNewComplexAHPExceptUniqMaxHorn => "SelectNewComplexAHPExceptUniqMaxHorn" => "SelectNewComplexAHPExceptUniqMaxHorn",
        PSelectNewComplexAHPExceptUniqMaxHorn => "PSelectNewComplexAHPExceptUniqMaxHorn" => "PSelectNewComplexAHPExceptUniqMaxHorn",
        SelectNewComplexAHPNS => "SelectNewComplexAHPNS" => "SelectNewComplexAHPNS",
        SelectVGNonCR => "SelectVGNonCR" => "SelectVGNonCR",
        SelectCQArEqLast => "SelectCQArEqLast" => "SelectCQArEqLast",
        SelectCQArEqFirst => "SelectCQArEqFirst" => "SelectCQArEqFirst",
        SelectCQIArEqLast => "SelectCQIArEqLast" => "SelectCQIArEqLast",
        SelectCQIArEqFirst => "SelectCQIArEqFirst" => "SelectCQIArEqFirst",
        SelectCQAr => "SelectCQAr" => "SelectCQAr",
        SelectCQIAr => "SelectCQIAr" => "SelectCQIAr",
        SelectCQArNpEqFirst => "SelectCQArNpEqFirst" => "SelectCQArNpEqFirst",
        SelectCQIArNpEqFirst => "SelectCQIArNpEqFirst" => "SelectCQIArNpEqFirst",
        SelectGrCQArEqFirst => "SelectGrCQArEqFirst" => "SelectGrCQArEqFirst",
        SelectCQGrArEqFirst => "SelectCQGrArEqFirst" => "SelectCQGrArEqFirst",
        SelectCQArNTEqFirst => "SelectCQArNTEqFirst" => "SelectCQArNTEqFirst",
        SelectCQIArNTEqFirst => "SelectCQIArNTEqFirst" => "SelectCQIArNTEqFirst",
        SelectCQArNTNpEqFirst => "SelectCQArNTNpEqFirst" => "SelectCQArNTNpEqFirst",
        SelectCQIArNTNpEqFirst => "SelectCQIArNTNpEqFirst" => "SelectCQIArNTNpEqFirst",
        SelectCQArNXTEqFirst => "SelectCQArNXTEqFirst" => "SelectCQArNXTEqFirst",
        SelectCQIArNXTEqFirst => "SelectCQIArNXTEqFirst" => "SelectCQIArNXTEqFirst",
        SelectCQArNTNp => "SelectCQArNTNp" => "SelectCQArNTNp",
        SelectCQIArNTNp => "SelectCQIArNTNp" => "SelectCQIArNTNp",
        SelectCQArNT => "SelectCQArNT" => "SelectCQArNT",
        SelectCQIArNT => "SelectCQIArNT" => "SelectCQIArNT",
        SelectCQArNp => "SelectCQArNp" => "SelectCQArNp",
        SelectCQIArNp => "SelectCQIArNp" => "SelectCQIArNp",
        SelectCQArNpEqFirstUnlessPDom => "SelectCQArNpEqFirstUnlessPDom" => "SelectCQArNpEqFirstUnlessPDom",
        SelectCQArNTEqFirstUnlessPDom => "SelectCQArNTEqFirstUnlessPDom" => "SelectCQArNTEqFirstUnlessPDom",
        SelectCQPrecW => "SelectCQPrecW" => "SelectCQPrecW",
        SelectCQIPrecW => "SelectCQIPrecW" => "SelectCQIPrecW",
        SelectCQPrecWNTNp => "SelectCQPrecWNTNp" => "SelectCQPrecWNTNp",
        SelectCQIPrecWNTNp => "SelectCQIPrecWNTNp" => "SelectCQIPrecWNTNp",
    }
}

option_codes! {
    /// AC handling (`--ac-handling=`).
    pub enum AcHandling ("AC handling") {
        NoHandling => "None" => "NoACHandling",
        DiscardAll => "DiscardAll" => "ACDiscardAll",
        KeepUnits => "KeepUnits" => "ACKeepUnits",
        KeepOrientable => "KeepOrientable" => "ACKeepOrientable",
    }
}

option_codes! {
    /// Term ordering (`-t`, `--term-ordering=`).
    pub enum TermOrdering ("term ordering") {
        Lpo => "LPO" => "LPO",
        Lpo4 => "LPO4" => "LPO4",
        Kbo => "KBO" => "KBO",
        Kbo6 => "KBO6" => "KBO6",
        Kbo1 => "KBO1" => "KBO",
    }
}

option_codes! {
    /// Symbol weight generation (`-w`, `--order-weight-generation=`).
    pub enum WeightGeneration ("weight generation") {
        NoMethod => "none" => "WNoMethod",
        FirstMaximal0 => "firstmaximal0" => "WSelectMaximal",
        Arity => "arity" => "WArityWeight",
        ArityMax0 => "aritymax0" => "WArityMax0",
        ModArity => "modarity" => "WModArityWeight",
        ModArityMax0 => "modaritymax0" => "WModArityMax0",
        AritySquared => "aritysquared" => "WAritySqWeight",
        AritySquaredMax0 => "aritysquaredmax0" => "WAritySqMax0",
        InvArity => "invarity" => "WInvArityWeight",
        InvArityMax0 => "invaritymax0" => "WInvArityMax0",
        InvAritySquared => "invaritysquared" => "WInvSqArityWeight",
        InvAritySquaredMax0 => "invaritysquaredmax0" => "WInvAritySqMax0",
        Precedence => "precedence" => "WPrecedence",
        InvPrecedence => "invprecedence" => "WPrecedenceInv",
        PrecRank5 => "precrank5" => "WPrecRank5",
        PrecRank10 => "precrank10" => "WPrecRank10",
        PrecRank20 => "precrank20" => "WPrecRank20",
        FreqCount => "freqcount" => "WFrequency",
        InvFreqCount => "invfreqcount" => "WInvFrequency",
        FreqRank => "freqrank" => "WFrequencyRank",
        InvFreqRank => "invfreqrank" => "WInvFrequencyRank",
        InvConjFreqRank => "invconjfreqrank" => "WInvConjFrequencyRank",
        FreqRankSquare => "freqranksquare" => "WFrequencyRankSq",
        InvFreqRankSquare => "invfreqranksquare" => "WInvFrequencyRankSq",
        InvModFreqRank => "invmodfreqrank" => "WInvModFreqRank",
        InvModFreqRankMax0 => "invmodfreqrankmax0" => "WInvModFreqRankMax0",
        Constant => "constant" => "WConstantWeight",
        TypeFreqCount => "typefreqcount" => "WTypeFrequencyCount",
        TypeFreqRank => "typefreqrank" => "WTypeFrequencyRank",
        InvTypeFreqCount => "invtypefreqcount" => "WTypeFrequencyCount",
        InvTypeFreqRank => "invtypefreqrank" => "WTypeFrequencyRank",
    }
}

option_codes! {
    /// Precedence generation (`-G`, `--order-precedence-generation=`).
    pub enum PrecedenceGeneration ("precedence generation") {
        NoMethod => "none" => "PNoMethod",
        UnaryFirst => "unary_first" => "PUnaryFirst",
        UnaryFreq => "unary_freq" => "PUnaryFirstFreq",
        Arity => "arity" => "PArity",
        InvArity => "invarity" => "PInvArity",
        ConstMax => "const_max" => "PConstFirst",
        ConstMin => "const_min" => "PInvArConstMin",
        Freq => "freq" => "PByFrequency",
        InvFreq => "invfreq" => "PByInvFrequency",
        InvConjFreq => "invconjfreq" => "PByInvConjFrequency",
        InvFreqConjMax => "invfreqconjmax" => "PByInvFreqConjMax",
        InvFreqConjMin => "invfreqconjmin" => "PByInvFreqConjMin",
        InvFreqConstMin => "invfreqconstmin" => "PByInvFreqConstMin",
        InvFreqHack => "invfreqhack" => "PByInvFreqHack",
        OrientAxioms => "orient_axioms" => "POrientAxioms",
        TypeFreq => "typefreq" => "PByTypeFreq",
        InvTypeFreq => "invtypefreq" => "PByInvTypeFreq",
    }
}

option_codes! {
    /// Simplification with unprocessed units (`--simplify-with-unprocessed-units=`).
    pub enum UnprocessedSimplify ("unprocessed simplification") {
        NoSimplify => "NoSimplify" => "NoUnitSimplify",
        TopSimplify => "TopSimplify" => "TopLevelUnitSimplify",
        FullSimplify => "FullSimplify" => "FullUnitSimplify",
    }
}

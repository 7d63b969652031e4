//! Complexity classifier
//!
//! Signals are evaluated in a fixed order and the first decisive one wins:
//!
//! 1. recursion (O(log n) with a value-returning exit, O(2^n) without)
//! 2. a superlinear built-in call (highest table entry wins)
//! 3. loop-nesting depth (always decisive, depth 0 → O(1))
//!
//! Signals are never combined.

use super::loop_nesting::{BraceLoopMeter, IndentLoopMeter, LoopNestingMeter};
use super::recursion::RecursionDetector;
use super::tokens;
use crate::features::cost_analysis::domain::{
    BuiltinComplexityTable, ClassificationSignal, ComplexityClass,
};
use crate::features::parsing::ports::LanguageFamily;

/// Classifies one masked function body of a given language family
pub struct ComplexityClassifier {
    family: LanguageFamily,
    builtins: BuiltinComplexityTable,
    recursion: RecursionDetector,
    meter: Box<dyn LoopNestingMeter>,
}

impl ComplexityClassifier {
    pub fn for_family(family: LanguageFamily) -> Self {
        let builtins = BuiltinComplexityTable::for_family(family);
        let meter: Box<dyn LoopNestingMeter> = match family {
            LanguageFamily::BraceDelimited => Box::new(BraceLoopMeter::new(builtins)),
            LanguageFamily::IndentationDelimited => Box::new(IndentLoopMeter::new(builtins)),
        };

        Self {
            family,
            builtins,
            recursion: RecursionDetector::new(),
            meter,
        }
    }

    pub fn family(&self) -> LanguageFamily {
        self.family
    }

    /// Classify the body of function `name`
    pub fn classify(&self, name: &str, body: &str) -> (ComplexityClass, ClassificationSignal) {
        if let Some(recursion) = self.recursion.detect(name, body) {
            let class = if recursion.divide_and_conquer {
                ComplexityClass::Logarithmic
            } else {
                ComplexityClass::Exponential
            };
            return (
                class,
                ClassificationSignal::Recursion {
                    divide_and_conquer: recursion.divide_and_conquer,
                },
            );
        }

        if let Some((builtin, class)) = self.costliest_builtin(body) {
            return (
                class,
                ClassificationSignal::Builtin {
                    name: builtin.to_string(),
                },
            );
        }

        let depth = self.meter.max_depth(body);
        (
            ComplexityClass::from_loop_depth(depth),
            ClassificationSignal::LoopNesting { depth },
        )
    }

    /// Highest superlinear built-in called in `body` (first one on ties)
    fn costliest_builtin<'b>(&self, body: &'b str) -> Option<(&'b str, ComplexityClass)> {
        tokens::calls(body)
            .filter(|(_, word)| self.builtins.is_superlinear(word))
            .filter_map(|(_, word)| self.builtins.lookup(word).map(|class| (word, class)))
            .fold(None, |best, (word, class)| match best {
                Some((_, best_class)) if best_class >= class => best,
                _ => Some((word, class)),
            })
    }
}

impl std::fmt::Debug for ComplexityClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplexityClassifier")
            .field("family", &self.family)
            .field("builtins", &self.builtins.len())
            .finish()
    }
}

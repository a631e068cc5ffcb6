//! Opacity, shadow, and blur utilities.

use gcss::ast::AstNode;
use gcss::parser::CandidateValue;
use gcss::registry::{Utility, UtilityPriority, UtilityRegistry};
use gcss::value::{infer_type, AllowedTypes};

pub(super) fn register(registry: &mut UtilityRegistry) {
    registry.add(opacity());
    registry.add(shadow());
    registry.add(blur());
}

fn opacity() -> Utility {
    Utility::new("opacity", UtilityPriority::StandardFunctional, |c, _cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        let value = match c.value()? {
            CandidateValue::Named(name) => {
                let pct: f64 = name.parse().ok()?;
                if !(0.0..=100.0).contains(&pct) {
                    return None;
                }
                format!("{name}%")
            }
            CandidateValue::Arbitrary(raw) => {
                infer_type(raw, AllowedTypes::NUMBER | AllowedTypes::PERCENTAGE)?;
                raw.clone()
            }
            CandidateValue::Fraction(_) => return None,
        };
        Some(vec![AstNode::decl("opacity", value)])
    })
}

fn shadow() -> Utility {
    Utility::new("shadow", UtilityPriority::StandardFunctional, |c, cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        let value = match c.value() {
            None => cx.theme.resolve_var("sm", &["shadow"])?,
            Some(CandidateValue::Named(name)) if name == "none" => "0 0 #0000".to_string(),
            Some(CandidateValue::Named(name)) => cx.theme.resolve_var(name, &["shadow"])?,
            Some(CandidateValue::Arbitrary(raw)) => raw.clone(),
            Some(CandidateValue::Fraction(_)) => return None,
        };
        Some(vec![AstNode::decl("box-shadow", value)])
    })
    .with_namespaces(&["shadow"])
}

fn blur() -> Utility {
    Utility::new("blur", UtilityPriority::StandardFunctional, |c, cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        let value = match c.value() {
            None => cx.theme.resolve_var("sm", &["blur"])?,
            Some(CandidateValue::Named(name)) if name == "none" => {
                return Some(vec![AstNode::decl("filter", "none")]);
            }
            Some(CandidateValue::Named(name)) => cx.theme.resolve_var(name, &["blur"])?,
            Some(CandidateValue::Arbitrary(raw)) => {
                infer_type(raw, AllowedTypes::LENGTH)?;
                raw.clone()
            }
            Some(CandidateValue::Fraction(_)) => return None,
        };
        Some(vec![AstNode::decl("filter", format!("blur({value})"))])
    })
    .with_namespaces(&["blur"])
}

use std::fmt;

use crate::error::Warning;
use crate::exercise::Property;
use crate::metrics::Weight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EquipmentKind {
    Barbell,
    Dumbbell,
    Kettlebell,
    Bodyweight,
    Plate,
    Band,
}

impl Property for EquipmentKind {
    fn iter() -> std::slice::Iter<'static, EquipmentKind> {
        static EQUIPMENT_KINDS: [EquipmentKind; 6] = [
            EquipmentKind::Barbell,
            EquipmentKind::Dumbbell,
            EquipmentKind::Kettlebell,
            EquipmentKind::Bodyweight,
            EquipmentKind::Plate,
            EquipmentKind::Band,
        ];
        EQUIPMENT_KINDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            EquipmentKind::Barbell => "Barbell",
            EquipmentKind::Dumbbell => "Dumbbell",
            EquipmentKind::Kettlebell => "Kettlebell",
            EquipmentKind::Bodyweight => "Bodyweight",
            EquipmentKind::Plate => "Plate",
            EquipmentKind::Band => "Band",
        }
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a notated weight relates to the load actually moved. Descriptive
/// parser output only; doubling for symmetric two-handed work is applied via
/// the rule table, not via this modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GripModifier {
    PerHand,
    Total,
    Asymmetric,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub kind: EquipmentKind,
    pub modifier: Option<GripModifier>,
    pub note: Option<String>,
}

impl Equipment {
    #[must_use]
    pub fn new(kind: EquipmentKind) -> Self {
        Self {
            kind,
            modifier: None,
            note: None,
        }
    }

    #[must_use]
    pub fn with_modifier(kind: EquipmentKind, modifier: GripModifier) -> Self {
        Self {
            kind,
            modifier: Some(modifier),
            note: None,
        }
    }
}

impl From<EquipmentKind> for Equipment {
    fn from(kind: EquipmentKind) -> Self {
        Self::new(kind)
    }
}

/// Raw weight field of a legacy set record, either already numeric or a
/// hand-authored string such as `"45# DB"`.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightToken {
    Number(f32),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedWeight {
    pub weight: Option<Weight>,
    pub left_right: Option<(Weight, Weight)>,
    pub equipment: Equipment,
    pub warning: Option<Warning>,
}

/// Interprets a hand-authored weight token.
///
/// Notations are tried in a fixed order: an exact `BW` marker, a number
/// tagged `DB` (per-hand dumbbell) or `KB` (kettlebell, including
/// `left/right` pairs for alternating-weight work), a bare number with an
/// optional `#` suffix, and finally the first run of digits found anywhere
/// in the string. Tokens without any digits fall back to bodyweight and
/// carry a warning instead of failing.
#[must_use]
pub fn parse_weight_notation(token: &WeightToken) -> ParsedWeight {
    match token {
        WeightToken::Number(value) => with_amount(
            *value,
            Equipment::new(EquipmentKind::Barbell),
            &value.to_string(),
        ),
        WeightToken::Text(text) => parse_text(text),
    }
}

fn parse_text(text: &str) -> ParsedWeight {
    if text == "BW" {
        return ParsedWeight {
            weight: None,
            left_right: None,
            equipment: Equipment::new(EquipmentKind::Bodyweight),
            warning: None,
        };
    }

    if let Some(amount) = tagged_amount(text, "DB") {
        return with_amount(
            amount,
            Equipment::with_modifier(EquipmentKind::Dumbbell, GripModifier::PerHand),
            text,
        );
    }

    if let Some(amount) = tagged_amount(text, "KB") {
        return with_amount(amount, Equipment::new(EquipmentKind::Kettlebell), text);
    }

    if let Some((left, right)) = dual_tagged_amount(text, "KB") {
        return with_dual_amount(left, right, text);
    }

    if let Some(amount) = bare_amount(text) {
        return with_amount(amount, Equipment::new(EquipmentKind::Barbell), text);
    }

    if let Some(amount) = first_digit_run(text) {
        return with_amount(amount, Equipment::new(EquipmentKind::Barbell), text);
    }

    ParsedWeight {
        weight: None,
        left_right: None,
        equipment: Equipment::new(EquipmentKind::Bodyweight),
        warning: Some(unparsable(text)),
    }
}

fn with_amount(value: f32, equipment: Equipment, token: &str) -> ParsedWeight {
    match Weight::new(value) {
        Ok(weight) => ParsedWeight {
            weight: Some(weight),
            left_right: None,
            equipment,
            warning: None,
        },
        Err(_) => ParsedWeight {
            weight: None,
            left_right: None,
            equipment,
            warning: Some(unparsable(token)),
        },
    }
}

fn with_dual_amount(left: f32, right: f32, token: &str) -> ParsedWeight {
    let equipment = Equipment {
        kind: EquipmentKind::Kettlebell,
        modifier: None,
        note: Some("alternating weights".to_string()),
    };
    match (Weight::new(left), Weight::new(right)) {
        (Ok(left), Ok(right)) => ParsedWeight {
            weight: None,
            left_right: Some((left, right)),
            equipment,
            warning: None,
        },
        _ => ParsedWeight {
            weight: None,
            left_right: None,
            equipment,
            warning: Some(unparsable(token)),
        },
    }
}

fn unparsable(token: &str) -> Warning {
    Warning::UnparsableWeight {
        exercise: None,
        token: token.to_string(),
    }
}

fn strip_suffix_ci<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    if text.len() < tag.len() || !text.is_char_boundary(text.len() - tag.len()) {
        return None;
    }
    let (head, tail) = text.split_at(text.len() - tag.len());
    tail.eq_ignore_ascii_case(tag).then_some(head)
}

/// Matches a full run of ASCII digits, e.g. the captured group of `(\d+)`.
fn digits(text: &str) -> Option<f32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn bare_amount(text: &str) -> Option<f32> {
    digits(text.strip_suffix('#').unwrap_or(text))
}

fn tagged_amount(text: &str, tag: &str) -> Option<f32> {
    bare_amount(strip_suffix_ci(text, tag)?.trim_end())
}

fn dual_tagged_amount(text: &str, tag: &str) -> Option<(f32, f32)> {
    let head = strip_suffix_ci(text, tag)?.trim_end();
    let head = head.strip_suffix('#').unwrap_or(head);
    let (left, right) = head.split_once('/')?;
    Some((digits(left)?, digits(right)?))
}

fn first_digit_run(text: &str) -> Option<f32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let run = &text[start..];
    let end = run
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(run.len());
    digits(&run[..end])
}

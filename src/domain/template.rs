use std::collections::BTreeSet;

use super::AppError;
use super::fields::FieldSet;

/// Behavior for placeholders with no value in the field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// Every placeholder must resolve; the full missing set is an error.
    Strict,
    /// Unresolved placeholders pass through literally.
    Permissive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A `${name}` template parsed into an ordered list of literal and
/// placeholder segments.
///
/// Values substitute verbatim: no escaping, no quoting inference. A `$` not
/// followed by `{`, or an unterminated `${`, is literal text.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Template {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(start) = rest.find("${") {
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else {
                break;
            };

            literal.push_str(&rest[..start]);
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(after[..end].to_string()));
            rest = &after[end + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Template { segments }
    }

    /// The set of keys the template references.
    pub fn required_keys(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Substitute every placeholder from `fields`.
    ///
    /// In strict mode the full required-key set is checked before any
    /// substitution happens, so a partial render is never produced.
    pub fn render(&self, fields: &FieldSet, mode: Substitution) -> Result<String, AppError> {
        if mode == Substitution::Strict {
            let missing: Vec<String> = self
                .required_keys()
                .into_iter()
                .filter(|key| fields.get(key).is_none())
                .map(str::to_string)
                .collect();
            if !missing.is_empty() {
                return Err(AppError::MissingFields(missing));
            }
        }

        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => match fields.get(name) {
                    Some(value) => output.push_str(value),
                    None => {
                        output.push_str("${");
                        output.push_str(name);
                        output.push('}');
                    }
                },
            }
        }
        Ok(output)
    }
}

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Entity kind tag carried by every externally visible identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Dentist,
    Appointment,
}

impl IdKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            IdKind::Dentist => "dentist",
            IdKind::Appointment => "appt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {} identifier: {input}", kind.prefix())]
pub struct ParseIdError {
    pub kind: IdKind,
    pub input: String,
}

/// Externally visible identifier: a raw storage id plus its kind tag,
/// rendered as `<prefix>_<uuid>`. Raw storage ids never cross the API
/// boundary directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicId {
    kind: IdKind,
    raw: Uuid,
}

impl PublicId {
    pub fn new(kind: IdKind, raw: Uuid) -> Self {
        Self { kind, raw }
    }

    pub fn dentist(raw: Uuid) -> Self {
        Self::new(IdKind::Dentist, raw)
    }

    pub fn appointment(raw: Uuid) -> Self {
        Self::new(IdKind::Appointment, raw)
    }

    /// Parse client input as an identifier of the given kind. Accepts the
    /// prefixed form or the bare uuid; a recognized prefix is stripped
    /// before the uuid is parsed.
    pub fn parse(kind: IdKind, input: &str) -> Result<Self, ParseIdError> {
        let stripped = input
            .strip_prefix(kind.prefix())
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(input);

        let raw = Uuid::parse_str(stripped).map_err(|_| ParseIdError {
            kind,
            input: input.to_string(),
        })?;

        Ok(Self { kind, raw })
    }

    pub fn kind(&self) -> IdKind {
        self.kind
    }

    pub fn raw(&self) -> Uuid {
        self.raw
    }
}

impl fmt::Display for PublicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind.prefix(), self.raw)
    }
}

//! Input normalization and verb dispatch.
//!
//! Normalization: trim, lowercase, split on whitespace. The first token is
//! the verb; verbs match exactly (no prefixes, no synonyms beyond the
//! aiuto/help pair). A recognized verb missing its required argument is NOT
//! an error: it falls through to [`Command::Free`], the free-form narrative
//! path. This is the engine's deliberate no-strict-validation policy.

/// A movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    Nord,
    /// South.
    Sud,
    /// East.
    Est,
    /// West.
    Ovest,
}

impl Direction {
    /// Parse a direction label. Only the four cardinal labels are valid.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "nord" => Some(Self::Nord),
            "sud" => Some(Self::Sud),
            "est" => Some(Self::Est),
            "ovest" => Some(Self::Ovest),
            _ => None,
        }
    }

    /// The label used in locations and messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Nord => "nord",
            Self::Sud => "sud",
            Self::Est => "est",
            Self::Ovest => "ovest",
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing left after trimming.
    Empty,
    /// `aiuto` / `help`: show the command list.
    Help,
    /// `inventario`: list carried items.
    Inventory,
    /// `guarda`: describe the surroundings (may spawn an encounter).
    Look,
    /// `prendi <oggetto>`: attempt to pick up an item.
    Take {
        /// The item name (remaining tokens joined by single spaces).
        item: String,
    },
    /// `usa <oggetto>`: use a carried item.
    UseItem {
        /// The item name (remaining tokens joined by single spaces).
        item: String,
    },
    /// `muovi <direzione>`: move toward a direction. The token is kept raw;
    /// validation (and the rejection message) belongs to the session.
    Move {
        /// The first argument token as typed (already lowercased).
        direction: String,
    },
    /// `parla <nome>`: talk to a known character. One token, exact match
    /// against the relationship keys.
    Talk {
        /// The first argument token.
        name: String,
    },
    /// `relazioni`: summarize known characters.
    Relationships,
    /// `eventi`: list recorded events.
    Events,
    /// Anything else: free-form narrative continuation.
    Free {
        /// The normalized input line.
        input: String,
    },
}

/// Parse one line of raw player input.
pub fn parse_command(raw: &str) -> Command {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return Command::Empty;
    }

    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let verb = tokens[0];
    let args = &tokens[1..];

    match verb {
        "aiuto" | "help" => Command::Help,
        "inventario" => Command::Inventory,
        "guarda" => Command::Look,
        "relazioni" => Command::Relationships,
        "eventi" => Command::Events,
        "prendi" if !args.is_empty() => Command::Take {
            item: args.join(" "),
        },
        "usa" if !args.is_empty() => Command::UseItem {
            item: args.join(" "),
        },
        "muovi" if !args.is_empty() => Command::Move {
            direction: args[0].to_string(),
        },
        "parla" if !args.is_empty() => Command::Talk {
            name: args[0].to_string(),
        },
        _ => Command::Free { input: normalized },
    }
}

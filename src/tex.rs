// src/tex.rs

//! Converts the small LaTeX subset used in figure labels into Unicode text.
//!
//! The SVG backend draws plain text, so labels are authored as LaTeX (the form a
//! reader would typeset) and flattened here: `$y=M^{2}(\chi_{[0,1]})(x)$`
//! becomes `y=M²(χ[0,1])(x)`.

/// Flattens a LaTeX label into Unicode text. `$` delimiters are dropped.
pub fn to_text(source: &str) -> String {
    let mut parser = Parser {
        chars: source.chars().filter(|&c| c != '$').collect(),
        pos: 0,
    };
    parser.parse_sequence(false)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consumes input up to the matching `}` when `in_group`, otherwise to the end.
    fn parse_sequence(&mut self, in_group: bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.next_char() {
            match c {
                '}' if in_group => return out,
                '{' => {
                    let inner = self.parse_sequence(true);
                    out.push_str(&inner);
                }
                '\\' => {
                    let command = self.parse_command();
                    out.push_str(&command);
                }
                '^' => {
                    let arg = self.parse_argument();
                    out.push_str(&superscript(&arg));
                }
                '_' => {
                    let arg = self.parse_argument();
                    out.push_str(&subscript(&arg));
                }
                other => out.push(other),
            }
        }
        out
    }

    /// A braced group, a single command, or a single character.
    fn parse_argument(&mut self) -> String {
        self.skip_whitespace();
        match self.next_char() {
            Some('{') => self.parse_sequence(true),
            Some('\\') => self.parse_command(),
            Some(c) => c.to_string(),
            None => String::new(),
        }
    }

    fn parse_command(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            name.push(c);
            self.pos += 1;
        }

        if name.is_empty() {
            // Control symbols: `\,` `\;` `\ ` are spacing, anything else is literal.
            return match self.next_char() {
                Some(',') | Some(';') | Some(' ') => " ".to_string(),
                Some(c) => c.to_string(),
                None => String::new(),
            };
        }

        match name.as_str() {
            "frac" => {
                let numerator = self.parse_argument();
                let denominator = self.parse_argument();
                format!("{}/{}", wrap_operand(&numerator), wrap_operand(&denominator))
            }
            "left" | "right" => String::new(),
            _ => symbol(&name).map(str::to_string).unwrap_or(name),
        }
    }
}

fn symbol(name: &str) -> Option<&'static str> {
    let s = match name {
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "chi" => "χ",
        "circ" => "∘",
        "leq" | "le" => "≤",
        "geq" | "ge" => "≥",
        "cdot" => "·",
        "times" => "×",
        "pm" => "±",
        "infty" => "∞",
        "exp" => "exp",
        "ln" => "ln",
        "log" => "log",
        _ => return None,
    };
    Some(s)
}

/// Parenthesises a fraction operand unless it is a single token.
fn wrap_operand(operand: &str) -> String {
    let operand = operand.trim();
    let atomic = operand
        .chars()
        .all(|c| !c.is_whitespace() && !"+-−/·∘=".contains(c));
    if atomic {
        operand.to_string()
    } else {
        format!("({operand})")
    }
}

fn superscript(arg: &str) -> String {
    let compact: String = arg.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return String::new();
    }
    if let Some(mapped) = map_all(&compact, superscript_char) {
        return mapped;
    }
    if compact.chars().count() == 1 {
        format!("^{compact}")
    } else {
        format!("^({})", arg.trim())
    }
}

fn subscript(arg: &str) -> String {
    let compact: String = arg.chars().filter(|c| !c.is_whitespace()).collect();
    map_all(&compact, subscript_char).unwrap_or_else(|| arg.trim().to_string())
}

fn map_all(text: &str, map: fn(char) -> Option<char>) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    text.chars().map(map).collect()
}

fn superscript_char(c: char) -> Option<char> {
    let mapped = match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' | '−' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'a' => 'ᵃ',
        'b' => 'ᵇ',
        'c' => 'ᶜ',
        'd' => 'ᵈ',
        'e' => 'ᵉ',
        'f' => 'ᶠ',
        'g' => 'ᵍ',
        'h' => 'ʰ',
        'i' => 'ⁱ',
        'j' => 'ʲ',
        'k' => 'ᵏ',
        'l' => 'ˡ',
        'm' => 'ᵐ',
        'n' => 'ⁿ',
        'o' => 'ᵒ',
        'p' => 'ᵖ',
        'r' => 'ʳ',
        's' => 'ˢ',
        't' => 'ᵗ',
        'u' => 'ᵘ',
        'v' => 'ᵛ',
        'w' => 'ʷ',
        'x' => 'ˣ',
        'y' => 'ʸ',
        'z' => 'ᶻ',
        'α' => 'ᵅ',
        'β' => 'ᵝ',
        _ => return None,
    };
    Some(mapped)
}

fn subscript_char(c: char) -> Option<char> {
    let mapped = match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' | '−' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'h' => 'ₕ',
        'i' => 'ᵢ',
        'j' => 'ⱼ',
        'k' => 'ₖ',
        'l' => 'ₗ',
        'm' => 'ₘ',
        'n' => 'ₙ',
        'o' => 'ₒ',
        'p' => 'ₚ',
        'r' => 'ᵣ',
        's' => 'ₛ',
        't' => 'ₜ',
        'u' => 'ᵤ',
        'v' => 'ᵥ',
        'x' => 'ₓ',
        'β' => 'ᵦ',
        _ => return None,
    };
    Some(mapped)
}


// src/tex.rs

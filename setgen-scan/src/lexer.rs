//! A forgiving C# tokenizer.
//!
//! Only the token shapes the declaration reader cares about are
//! distinguished. Comments, preprocessor lines and whitespace are dropped;
//! unterminated literals end at the end of the input.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Ident(String),
    /// A string literal with escapes resolved.
    Str(String),
    Punct(char),
    /// Numbers, char literals, interpolated strings.
    Other(String),
}

impl Token {
    pub(crate) fn is_punct(&self, c: char) -> bool {
        matches!(self, Token::Punct(p) if *p == c)
    }

    pub(crate) fn ident(&self) -> Option<&str> {
        match self {
            Token::Ident(name) => Some(name),
            _ => None,
        }
    }

    pub(crate) fn text(&self) -> String {
        match self {
            Token::Ident(text) | Token::Other(text) => text.clone(),
            Token::Str(value) => format!("{:?}", value),
            Token::Punct(c) => c.to_string(),
        }
    }
}

pub(crate) fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line_start: bool,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line_start: true,
            tokens: Vec::new(),
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(c) = self.peek(0) {
            if c == '\n' {
                self.line_start = true;
                self.pos += 1;
                continue;
            }
            if c.is_whitespace() {
                self.pos += 1;
                continue;
            }

            if c == '#' && self.line_start {
                self.skip_line();
                continue;
            }
            self.line_start = false;

            match (c, self.peek(1)) {
                ('/', Some('/')) => self.skip_line(),
                ('/', Some('*')) => self.skip_block_comment(),
                ('"', _) => self.lex_string(),
                ('@', Some('"')) => {
                    self.pos += 1;
                    self.lex_verbatim_string();
                }
                ('$', _) | ('@', Some('$')) => self.lex_interpolated(),
                ('\'', _) => self.lex_char(),
                ('@', Some(next)) if is_ident_start(next) => {
                    self.pos += 1;
                    self.lex_ident();
                }
                _ if is_ident_start(c) => self.lex_ident(),
                _ if c.is_ascii_digit() => self.lex_number(),
                _ => {
                    self.tokens.push(Token::Punct(c));
                    self.pos += 1;
                }
            }
        }
        self.tokens
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.peek(0) {
            if c == '\n' {
                break;
            }
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        while let Some(c) = self.peek(0) {
            if c == '*' && self.peek(1) == Some('/') {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
    }

    fn lex_ident(&mut self) {
        let start = self.pos;
        while self.peek(0).is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        let ident: String = self.chars[start..self.pos].iter().collect();
        self.tokens.push(Token::Ident(ident));
    }

    fn lex_number(&mut self) {
        let start = self.pos;
        while self
            .peek(0)
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            self.pos += 1;
        }
        let number: String = self.chars[start..self.pos].iter().collect();
        self.tokens.push(Token::Other(number));
    }

    fn lex_string(&mut self) {
        let quotes = self.count_quotes();
        if quotes >= 3 {
            self.lex_raw_string(quotes);
            return;
        }
        if quotes == 2 {
            self.pos += 2;
            self.tokens.push(Token::Str(String::new()));
            return;
        }

        self.pos += 1;
        let mut value = String::new();
        while let Some(c) = self.peek(0) {
            match c {
                '"' => {
                    self.pos += 1;
                    break;
                }
                '\n' => break,
                '\\' => {
                    if let Some(escaped) = self.peek(1) {
                        value.push(unescape(escaped));
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                    }
                }
                _ => {
                    value.push(c);
                    self.pos += 1;
                }
            }
        }
        self.tokens.push(Token::Str(value));
    }

    /// `@"..."` with the cursor on the opening quote; `""` is a literal quote.
    fn lex_verbatim_string(&mut self) {
        self.pos += 1;
        let mut value = String::new();
        while let Some(c) = self.peek(0) {
            if c == '"' {
                if self.peek(1) == Some('"') {
                    value.push('"');
                    self.pos += 2;
                    continue;
                }
                self.pos += 1;
                break;
            }
            value.push(c);
            self.pos += 1;
        }
        self.tokens.push(Token::Str(value));
    }

    /// `"""..."""` with the cursor on the first of `quotes` opening quotes.
    fn lex_raw_string(&mut self, quotes: usize) {
        self.pos += quotes;
        let start = self.pos;
        while self.pos < self.chars.len() {
            if self.count_quotes() >= quotes {
                let value: String = self.chars[start..self.pos].iter().collect();
                self.pos += quotes;
                self.tokens.push(Token::Str(value.trim().to_string()));
                return;
            }
            self.pos += 1;
        }
        let value: String = self.chars[start..].iter().collect();
        self.tokens.push(Token::Str(value.trim().to_string()));
    }

    /// Interpolated strings are never constant, so only their extent matters.
    fn lex_interpolated(&mut self) {
        let start = self.pos;
        let mut verbatim = false;
        while let Some(c) = self.peek(0) {
            match c {
                '$' => {}
                '@' => verbatim = true,
                _ => break,
            }
            self.pos += 1;
        }

        if self.peek(0) != Some('"') {
            self.tokens.push(Token::Punct('$'));
            self.pos = start + 1;
            return;
        }

        self.pos += 1;
        let mut depth = 0usize;
        while let Some(c) = self.peek(0) {
            match c {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                '\\' if !verbatim => self.pos += 1,
                '"' if depth == 0 => {
                    if verbatim && self.peek(1) == Some('"') {
                        self.pos += 1;
                    } else {
                        self.pos += 1;
                        break;
                    }
                }
                '\n' if !verbatim && depth == 0 => break,
                _ => {}
            }
            self.pos += 1;
        }

        let end = self.pos.min(self.chars.len());
        let text: String = self.chars[start..end].iter().collect();
        self.tokens.push(Token::Other(text));
    }

    fn lex_char(&mut self) {
        let start = self.pos;
        self.pos += 1;
        while let Some(c) = self.peek(0) {
            match c {
                '\\' => self.pos += 2,
                '\'' => {
                    self.pos += 1;
                    break;
                }
                '\n' => break,
                _ => self.pos += 1,
            }
        }
        let end = self.pos.min(self.chars.len());
        let text: String = self.chars[start..end].iter().collect();
        self.tokens.push(Token::Other(text));
    }

    fn count_quotes(&self) -> usize {
        self.chars[self.pos..]
            .iter()
            .take_while(|&&c| c == '"')
            .count()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

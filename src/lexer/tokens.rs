use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("return", TokenKind::Return);
        map.insert("wain", TokenKind::Wain);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("println", TokenKind::Println);
        map.insert("new", TokenKind::New);
        map.insert("delete", TokenKind::Delete);
        map.insert("NULL", TokenKind::Null);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Ampersand,

    Comma,
    Semicolon,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    // Reserved
    Int,
    Return,
    Wain,
    If,
    Else,
    While,
    Println,
    New,
    Delete,
    Null,
}

impl TokenKind {
    /// Name of the kind as it appears on the output boundary.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "ID",
            TokenKind::Number => "NUM",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::OpenBracket => "LBRACK",
            TokenKind::CloseBracket => "RBRACK",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PCT",
            TokenKind::Ampersand => "AMP",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMI",
            TokenKind::Assignment => "BECOMES",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NE",
            TokenKind::Less => "LT",
            TokenKind::LessEquals => "LE",
            TokenKind::Greater => "GT",
            TokenKind::GreaterEquals => "GE",
            TokenKind::Int => "INT",
            TokenKind::Return => "RETURN",
            TokenKind::Wain => "WAIN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Println => "PRINTLN",
            TokenKind::New => "NEW",
            TokenKind::Delete => "DELETE",
            TokenKind::Null => "NULL",
        }
    }

    /// The only spelling a kind can have, or `None` for `ID` and `NUM`
    /// whose lexeme is carried by the token itself.
    pub fn fixed_lexeme(&self) -> Option<&'static str> {
        let lexeme = match self {
            TokenKind::Identifier | TokenKind::Number => return None,
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Ampersand => "&",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Int => "int",
            TokenKind::Return => "return",
            TokenKind::Wain => "wain",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Println => "println",
            TokenKind::New => "new",
            TokenKind::Delete => "delete",
            TokenKind::Null => "NULL",
        };

        Some(lexeme)
    }

    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Return
                | TokenKind::Wain
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Println
                | TokenKind::New
                | TokenKind::Delete
                | TokenKind::Null
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.value)
    }
}

impl Token {
    /// Builds a token for a kind with a fixed spelling. Returns `None` for
    /// `ID` and `NUM`, which need their lexeme supplied.
    pub fn fixed(kind: TokenKind) -> Option<Token> {
        kind.fixed_lexeme().map(|lexeme| Token {
            kind,
            value: String::from(lexeme),
        })
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// SQL keywords and punctuation.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Punctuation
    LPAREN,
    RPAREN,
    COMMA,
    SEMI,
    DOT,

    // Comparison operators
    EQ,
    NE,
    LT,
    GT,
    LE,
    GE,

    // Keywords
    SELECT,
    FROM,
    WHERE,
    AND,
    OR,
    NOT,
    IS,
    NULL,
    LIKE,
    BETWEEN,
    IN,
    ORDER,
    BY,
    ASC,
    DESC,
    LIMIT,
    OFFSET,
    ROWS,
    FETCH,
    NEXT,
    ONLY,
    INSERT,
    INTO,
    VALUES,
    DEFAULT,
    RETURNING,
    OUTPUT,
    UPDATE,
    SET,
    DELETE,
    ON,
    CONFLICT,
    DO,
    NOTHING,
    DUPLICATE,
    KEY,
    MERGE,
    USING,
    AS,
    WHEN,
    MATCHED,
    THEN,
    TRUNCATE,
    TABLE,
}

impl Token {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Token::LPAREN => "(",
            Token::RPAREN => ")",
            Token::COMMA => ",",
            Token::SEMI => ";",
            Token::DOT => ".",
            Token::EQ => "=",
            Token::NE => "<>",
            Token::LT => "<",
            Token::GT => ">",
            Token::LE => "<=",
            Token::GE => ">=",
            Token::SELECT => "SELECT",
            Token::FROM => "FROM",
            Token::WHERE => "WHERE",
            Token::AND => "AND",
            Token::OR => "OR",
            Token::NOT => "NOT",
            Token::IS => "IS",
            Token::NULL => "NULL",
            Token::LIKE => "LIKE",
            Token::BETWEEN => "BETWEEN",
            Token::IN => "IN",
            Token::ORDER => "ORDER",
            Token::BY => "BY",
            Token::ASC => "ASC",
            Token::DESC => "DESC",
            Token::LIMIT => "LIMIT",
            Token::OFFSET => "OFFSET",
            Token::ROWS => "ROWS",
            Token::FETCH => "FETCH",
            Token::NEXT => "NEXT",
            Token::ONLY => "ONLY",
            Token::INSERT => "INSERT",
            Token::INTO => "INTO",
            Token::VALUES => "VALUES",
            Token::DEFAULT => "DEFAULT",
            Token::RETURNING => "RETURNING",
            Token::OUTPUT => "OUTPUT",
            Token::UPDATE => "UPDATE",
            Token::SET => "SET",
            Token::DELETE => "DELETE",
            Token::ON => "ON",
            Token::CONFLICT => "CONFLICT",
            Token::DO => "DO",
            Token::NOTHING => "NOTHING",
            Token::DUPLICATE => "DUPLICATE",
            Token::KEY => "KEY",
            Token::MERGE => "MERGE",
            Token::USING => "USING",
            Token::AS => "AS",
            Token::WHEN => "WHEN",
            Token::MATCHED => "MATCHED",
            Token::THEN => "THEN",
            Token::TRUNCATE => "TRUNCATE",
            Token::TABLE => "TABLE",
        }
    }

    /// Comparison operators are always surrounded by spaces.
    #[inline]
    pub const fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::EQ | Token::NE | Token::LT | Token::GT | Token::LE | Token::GE
        )
    }

    /// Punctuation never takes part in word spacing.
    #[inline]
    pub const fn is_punctuation(&self) -> bool {
        matches!(
            self,
            Token::LPAREN | Token::RPAREN | Token::COMMA | Token::SEMI | Token::DOT
        )
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

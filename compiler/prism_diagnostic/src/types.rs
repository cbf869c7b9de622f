//! Diagnostic type codes and levels.
//!
//! Errors and warnings share one numbering on the wire: error types occupy
//! `0..ErrorType::COUNT`, warning types follow immediately after. The split
//! point moves between parser versions, so these tables are only valid for
//! the format version the loader accepts.

use std::fmt;

macro_rules! diagnostic_types {
    (
        $(#[$meta:meta])*
        $ty:ident { $($variant:ident => $name:literal,)* }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub enum $ty {
            $( $variant, )*
        }

        impl $ty {
            /// Every type, in wire order.
            pub const ALL: &'static [$ty] = &[$( $ty::$variant, )*];

            /// Upper-case name as used by the parser.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $ty::$variant => $name, )*
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

diagnostic_types! {
    /// Error type, indexed by its wire code.
    ErrorType {
        AliasArgument => "ALIAS_ARGUMENT",
        AliasArgumentNumberedReference => "ALIAS_ARGUMENT_NUMBERED_REFERENCE",
        AmpampeqMultiAssign => "AMPAMPEQ_MULTI_ASSIGN",
        ArgumentAfterBlock => "ARGUMENT_AFTER_BLOCK",
        ArgumentAfterForwardingEllipses => "ARGUMENT_AFTER_FORWARDING_ELLIPSES",
        ArgumentBareHash => "ARGUMENT_BARE_HASH",
        ArgumentBlockForwarding => "ARGUMENT_BLOCK_FORWARDING",
        ArgumentBlockMulti => "ARGUMENT_BLOCK_MULTI",
        ArgumentConflictAmpersand => "ARGUMENT_CONFLICT_AMPERSAND",
        ArgumentConflictStar => "ARGUMENT_CONFLICT_STAR",
        ArgumentConflictStarStar => "ARGUMENT_CONFLICT_STAR_STAR",
        ArgumentFormalClass => "ARGUMENT_FORMAL_CLASS",
        ArgumentFormalConstant => "ARGUMENT_FORMAL_CONSTANT",
        ArgumentFormalGlobal => "ARGUMENT_FORMAL_GLOBAL",
        ArgumentFormalIvar => "ARGUMENT_FORMAL_IVAR",
        ArgumentForwardingUnbound => "ARGUMENT_FORWARDING_UNBOUND",
        ArgumentNoForwardingAmpersand => "ARGUMENT_NO_FORWARDING_AMPERSAND",
        ArgumentNoForwardingEllipses => "ARGUMENT_NO_FORWARDING_ELLIPSES",
        ArgumentNoForwardingStar => "ARGUMENT_NO_FORWARDING_STAR",
        ArgumentNoForwardingStarStar => "ARGUMENT_NO_FORWARDING_STAR_STAR",
        ArgumentSplatAfterAssocSplat => "ARGUMENT_SPLAT_AFTER_ASSOC_SPLAT",
        ArgumentSplatAfterSplat => "ARGUMENT_SPLAT_AFTER_SPLAT",
        ArgumentTermParen => "ARGUMENT_TERM_PAREN",
        ArgumentUnexpectedBlock => "ARGUMENT_UNEXPECTED_BLOCK",
        ArrayElement => "ARRAY_ELEMENT",
        ArrayExpression => "ARRAY_EXPRESSION",
        ArrayExpressionAfterStar => "ARRAY_EXPRESSION_AFTER_STAR",
        ArraySeparator => "ARRAY_SEPARATOR",
        ArrayTerm => "ARRAY_TERM",
        BeginLonelyElse => "BEGIN_LONELY_ELSE",
        BeginTerm => "BEGIN_TERM",
        BeginUpcaseBrace => "BEGIN_UPCASE_BRACE",
        BeginUpcaseTerm => "BEGIN_UPCASE_TERM",
        BeginUpcaseToplevel => "BEGIN_UPCASE_TOPLEVEL",
        BlockParamLocalVariable => "BLOCK_PARAM_LOCAL_VARIABLE",
        BlockParamPipeTerm => "BLOCK_PARAM_PIPE_TERM",
        BlockTermBrace => "BLOCK_TERM_BRACE",
        BlockTermEnd => "BLOCK_TERM_END",
        CannotParseExpression => "CANNOT_PARSE_EXPRESSION",
        CannotParseStringPart => "CANNOT_PARSE_STRING_PART",
        CaseExpressionAfterCase => "CASE_EXPRESSION_AFTER_CASE",
        CaseExpressionAfterWhen => "CASE_EXPRESSION_AFTER_WHEN",
        CaseMatchMissingPredicate => "CASE_MATCH_MISSING_PREDICATE",
        CaseMissingConditions => "CASE_MISSING_CONDITIONS",
        CaseTerm => "CASE_TERM",
        ClassInMethod => "CLASS_IN_METHOD",
        ClassName => "CLASS_NAME",
        ClassSuperclass => "CLASS_SUPERCLASS",
        ClassTerm => "CLASS_TERM",
        ClassUnexpectedEnd => "CLASS_UNEXPECTED_END",
        ClassVariableBare => "CLASS_VARIABLE_BARE",
        ConditionalElsifPredicate => "CONDITIONAL_ELSIF_PREDICATE",
        ConditionalIfPredicate => "CONDITIONAL_IF_PREDICATE",
        ConditionalPredicateTerm => "CONDITIONAL_PREDICATE_TERM",
        ConditionalTerm => "CONDITIONAL_TERM",
        ConditionalTermElse => "CONDITIONAL_TERM_ELSE",
        ConditionalUnlessPredicate => "CONDITIONAL_UNLESS_PREDICATE",
        ConditionalUntilPredicate => "CONDITIONAL_UNTIL_PREDICATE",
        ConditionalWhilePredicate => "CONDITIONAL_WHILE_PREDICATE",
        ConstantPathColonColonConstant => "CONSTANT_PATH_COLON_COLON_CONSTANT",
        DefEndless => "DEF_ENDLESS",
        DefEndlessSetter => "DEF_ENDLESS_SETTER",
        DefName => "DEF_NAME",
        DefParamsTerm => "DEF_PARAMS_TERM",
        DefParamsTermParen => "DEF_PARAMS_TERM_PAREN",
        DefReceiver => "DEF_RECEIVER",
        DefReceiverTerm => "DEF_RECEIVER_TERM",
        DefTerm => "DEF_TERM",
        DefinedExpression => "DEFINED_EXPRESSION",
        EmbdocTerm => "EMBDOC_TERM",
        EmbexprEnd => "EMBEXPR_END",
        EmbvarInvalid => "EMBVAR_INVALID",
        EndUpcaseBrace => "END_UPCASE_BRACE",
        EndUpcaseTerm => "END_UPCASE_TERM",
        EscapeInvalidControl => "ESCAPE_INVALID_CONTROL",
        EscapeInvalidControlRepeat => "ESCAPE_INVALID_CONTROL_REPEAT",
        EscapeInvalidHexadecimal => "ESCAPE_INVALID_HEXADECIMAL",
        EscapeInvalidMeta => "ESCAPE_INVALID_META",
        EscapeInvalidMetaRepeat => "ESCAPE_INVALID_META_REPEAT",
        EscapeInvalidUnicode => "ESCAPE_INVALID_UNICODE",
        EscapeInvalidUnicodeCmFlags => "ESCAPE_INVALID_UNICODE_CM_FLAGS",
        EscapeInvalidUnicodeList => "ESCAPE_INVALID_UNICODE_LIST",
        EscapeInvalidUnicodeLiteral => "ESCAPE_INVALID_UNICODE_LITERAL",
        EscapeInvalidUnicodeLong => "ESCAPE_INVALID_UNICODE_LONG",
        EscapeInvalidUnicodeShort => "ESCAPE_INVALID_UNICODE_SHORT",
        EscapeInvalidUnicodeTerm => "ESCAPE_INVALID_UNICODE_TERM",
        ExpectArgument => "EXPECT_ARGUMENT",
        ExpectEolAfterStatement => "EXPECT_EOL_AFTER_STATEMENT",
        ExpectExpressionAfterAmpampeq => "EXPECT_EXPRESSION_AFTER_AMPAMPEQ",
        ExpectExpressionAfterComma => "EXPECT_EXPRESSION_AFTER_COMMA",
        ExpectExpressionAfterEqual => "EXPECT_EXPRESSION_AFTER_EQUAL",
        ExpectExpressionAfterLessLess => "EXPECT_EXPRESSION_AFTER_LESS_LESS",
        ExpectExpressionAfterLparen => "EXPECT_EXPRESSION_AFTER_LPAREN",
        ExpectExpressionAfterOperator => "EXPECT_EXPRESSION_AFTER_OPERATOR",
        ExpectExpressionAfterPipepipeeq => "EXPECT_EXPRESSION_AFTER_PIPEPIPEEQ",
        ExpectExpressionAfterQuestion => "EXPECT_EXPRESSION_AFTER_QUESTION",
        ExpectExpressionAfterSplat => "EXPECT_EXPRESSION_AFTER_SPLAT",
        ExpectExpressionAfterSplatHash => "EXPECT_EXPRESSION_AFTER_SPLAT_HASH",
        ExpectExpressionAfterStar => "EXPECT_EXPRESSION_AFTER_STAR",
        ExpectForDelimiter => "EXPECT_FOR_DELIMITER",
        ExpectIdentReqParameter => "EXPECT_IDENT_REQ_PARAMETER",
        ExpectInDelimiter => "EXPECT_IN_DELIMITER",
        ExpectLparenAfterNotLparen => "EXPECT_LPAREN_AFTER_NOT_LPAREN",
        ExpectLparenAfterNotOther => "EXPECT_LPAREN_AFTER_NOT_OTHER",
        ExpectLparenReqParameter => "EXPECT_LPAREN_REQ_PARAMETER",
        ExpectMessage => "EXPECT_MESSAGE",
        ExpectRbracket => "EXPECT_RBRACKET",
        ExpectRparen => "EXPECT_RPAREN",
        ExpectRparenAfterMulti => "EXPECT_RPAREN_AFTER_MULTI",
        ExpectRparenReqParameter => "EXPECT_RPAREN_REQ_PARAMETER",
        ExpectSingletonClassDelimiter => "EXPECT_SINGLETON_CLASS_DELIMITER",
        ExpectStringContent => "EXPECT_STRING_CONTENT",
        ExpectWhenDelimiter => "EXPECT_WHEN_DELIMITER",
        ExpressionBareHash => "EXPRESSION_BARE_HASH",
        ExpressionNotWritable => "EXPRESSION_NOT_WRITABLE",
        ExpressionNotWritableEncoding => "EXPRESSION_NOT_WRITABLE_ENCODING",
        ExpressionNotWritableFalse => "EXPRESSION_NOT_WRITABLE_FALSE",
        ExpressionNotWritableFile => "EXPRESSION_NOT_WRITABLE_FILE",
        ExpressionNotWritableLine => "EXPRESSION_NOT_WRITABLE_LINE",
        ExpressionNotWritableNil => "EXPRESSION_NOT_WRITABLE_NIL",
        ExpressionNotWritableNumbered => "EXPRESSION_NOT_WRITABLE_NUMBERED",
        ExpressionNotWritableSelf => "EXPRESSION_NOT_WRITABLE_SELF",
        ExpressionNotWritableTrue => "EXPRESSION_NOT_WRITABLE_TRUE",
        FloatParse => "FLOAT_PARSE",
        ForCollection => "FOR_COLLECTION",
        ForIn => "FOR_IN",
        ForIndex => "FOR_INDEX",
        ForTerm => "FOR_TERM",
        GlobalVariableBare => "GLOBAL_VARIABLE_BARE",
        HashExpressionAfterLabel => "HASH_EXPRESSION_AFTER_LABEL",
        HashKey => "HASH_KEY",
        HashRocket => "HASH_ROCKET",
        HashTerm => "HASH_TERM",
        HashValue => "HASH_VALUE",
        HeredocIdentifier => "HEREDOC_IDENTIFIER",
        HeredocTerm => "HEREDOC_TERM",
        IncompleteQuestionMark => "INCOMPLETE_QUESTION_MARK",
        IncompleteVariableClass => "INCOMPLETE_VARIABLE_CLASS",
        IncompleteVariableClass33 => "INCOMPLETE_VARIABLE_CLASS_3_3",
        IncompleteVariableInstance => "INCOMPLETE_VARIABLE_INSTANCE",
        IncompleteVariableInstance33 => "INCOMPLETE_VARIABLE_INSTANCE_3_3",
        InstanceVariableBare => "INSTANCE_VARIABLE_BARE",
        InvalidBlockExit => "INVALID_BLOCK_EXIT",
        InvalidCharacter => "INVALID_CHARACTER",
        InvalidComma => "INVALID_COMMA",
        InvalidEncodingMagicComment => "INVALID_ENCODING_MAGIC_COMMENT",
        InvalidEscapeCharacter => "INVALID_ESCAPE_CHARACTER",
        InvalidFloatExponent => "INVALID_FLOAT_EXPONENT",
        InvalidLocalVariableRead => "INVALID_LOCAL_VARIABLE_READ",
        InvalidLocalVariableWrite => "INVALID_LOCAL_VARIABLE_WRITE",
        InvalidMultibyteChar => "INVALID_MULTIBYTE_CHAR",
        InvalidMultibyteCharacter => "INVALID_MULTIBYTE_CHARACTER",
        InvalidMultibyteEscape => "INVALID_MULTIBYTE_ESCAPE",
        InvalidNumberBinary => "INVALID_NUMBER_BINARY",
        InvalidNumberDecimal => "INVALID_NUMBER_DECIMAL",
        InvalidNumberFraction => "INVALID_NUMBER_FRACTION",
        InvalidNumberHexadecimal => "INVALID_NUMBER_HEXADECIMAL",
        InvalidNumberOctal => "INVALID_NUMBER_OCTAL",
        InvalidNumberUnderscoreInner => "INVALID_NUMBER_UNDERSCORE_INNER",
        InvalidNumberUnderscoreTrailing => "INVALID_NUMBER_UNDERSCORE_TRAILING",
        InvalidPercent => "INVALID_PERCENT",
        InvalidPercentEof => "INVALID_PERCENT_EOF",
        InvalidPrintableCharacter => "INVALID_PRINTABLE_CHARACTER",
        InvalidRetryWithoutRescue => "INVALID_RETRY_WITHOUT_RESCUE",
        InvalidSymbol => "INVALID_SYMBOL",
        InvalidVariableGlobal => "INVALID_VARIABLE_GLOBAL",
        InvalidVariableGlobal33 => "INVALID_VARIABLE_GLOBAL_3_3",
        InvalidYield => "INVALID_YIELD",
        ItNotAllowedNumbered => "IT_NOT_ALLOWED_NUMBERED",
        ItNotAllowedOrdinary => "IT_NOT_ALLOWED_ORDINARY",
        LambdaOpen => "LAMBDA_OPEN",
        LambdaTermBrace => "LAMBDA_TERM_BRACE",
        LambdaTermEnd => "LAMBDA_TERM_END",
        ListILowerElement => "LIST_I_LOWER_ELEMENT",
        ListILowerTerm => "LIST_I_LOWER_TERM",
        ListIUpperElement => "LIST_I_UPPER_ELEMENT",
        ListIUpperTerm => "LIST_I_UPPER_TERM",
        ListWLowerElement => "LIST_W_LOWER_ELEMENT",
        ListWLowerTerm => "LIST_W_LOWER_TERM",
        ListWUpperElement => "LIST_W_UPPER_ELEMENT",
        ListWUpperTerm => "LIST_W_UPPER_TERM",
        MallocFailed => "MALLOC_FAILED",
        MixedEncoding => "MIXED_ENCODING",
        ModuleInMethod => "MODULE_IN_METHOD",
        ModuleName => "MODULE_NAME",
        ModuleTerm => "MODULE_TERM",
        MultiAssignMultiSplats => "MULTI_ASSIGN_MULTI_SPLATS",
        MultiAssignUnexpectedRest => "MULTI_ASSIGN_UNEXPECTED_REST",
        NestingTooDeep => "NESTING_TOO_DEEP",
        NoLocalVariable => "NO_LOCAL_VARIABLE",
        NonAssociativeOperator => "NON_ASSOCIATIVE_OPERATOR",
        NotExpression => "NOT_EXPRESSION",
        NumberLiteralUnderscore => "NUMBER_LITERAL_UNDERSCORE",
        NumberedParameterInnerBlock => "NUMBERED_PARAMETER_INNER_BLOCK",
        NumberedParameterIt => "NUMBERED_PARAMETER_IT",
        NumberedParameterOrdinary => "NUMBERED_PARAMETER_ORDINARY",
        NumberedParameterOuterBlock => "NUMBERED_PARAMETER_OUTER_BLOCK",
        OperatorMultiAssign => "OPERATOR_MULTI_ASSIGN",
        OperatorWriteArguments => "OPERATOR_WRITE_ARGUMENTS",
        OperatorWriteBlock => "OPERATOR_WRITE_BLOCK",
        ParameterAssocSplatMulti => "PARAMETER_ASSOC_SPLAT_MULTI",
        ParameterBlockMulti => "PARAMETER_BLOCK_MULTI",
        ParameterCircular => "PARAMETER_CIRCULAR",
        ParameterForwardingAfterRest => "PARAMETER_FORWARDING_AFTER_REST",
        ParameterMethodName => "PARAMETER_METHOD_NAME",
        ParameterNameDuplicated => "PARAMETER_NAME_DUPLICATED",
        ParameterNoDefault => "PARAMETER_NO_DEFAULT",
        ParameterNoDefaultKw => "PARAMETER_NO_DEFAULT_KW",
        ParameterNumberedReserved => "PARAMETER_NUMBERED_RESERVED",
        ParameterOrder => "PARAMETER_ORDER",
        ParameterSplatMulti => "PARAMETER_SPLAT_MULTI",
        ParameterStar => "PARAMETER_STAR",
        ParameterUnexpectedFwd => "PARAMETER_UNEXPECTED_FWD",
        ParameterUnexpectedNoKw => "PARAMETER_UNEXPECTED_NO_KW",
        ParameterWildLooseComma => "PARAMETER_WILD_LOOSE_COMMA",
        PatternArrayMultipleRests => "PATTERN_ARRAY_MULTIPLE_RESTS",
        PatternCaptureDuplicate => "PATTERN_CAPTURE_DUPLICATE",
        PatternExpressionAfterBracket => "PATTERN_EXPRESSION_AFTER_BRACKET",
        PatternExpressionAfterComma => "PATTERN_EXPRESSION_AFTER_COMMA",
        PatternExpressionAfterHrocket => "PATTERN_EXPRESSION_AFTER_HROCKET",
        PatternExpressionAfterIn => "PATTERN_EXPRESSION_AFTER_IN",
        PatternExpressionAfterKey => "PATTERN_EXPRESSION_AFTER_KEY",
        PatternExpressionAfterParen => "PATTERN_EXPRESSION_AFTER_PAREN",
        PatternExpressionAfterPin => "PATTERN_EXPRESSION_AFTER_PIN",
        PatternExpressionAfterPipe => "PATTERN_EXPRESSION_AFTER_PIPE",
        PatternExpressionAfterRange => "PATTERN_EXPRESSION_AFTER_RANGE",
        PatternExpressionAfterRest => "PATTERN_EXPRESSION_AFTER_REST",
        PatternFindMissingInner => "PATTERN_FIND_MISSING_INNER",
        PatternHashImplicit => "PATTERN_HASH_IMPLICIT",
        PatternHashKey => "PATTERN_HASH_KEY",
        PatternHashKeyDuplicate => "PATTERN_HASH_KEY_DUPLICATE",
        PatternHashKeyInterpolated => "PATTERN_HASH_KEY_INTERPOLATED",
        PatternHashKeyLabel => "PATTERN_HASH_KEY_LABEL",
        PatternHashKeyLocals => "PATTERN_HASH_KEY_LOCALS",
        PatternIdentAfterHrocket => "PATTERN_IDENT_AFTER_HROCKET",
        PatternLabelAfterComma => "PATTERN_LABEL_AFTER_COMMA",
        PatternRest => "PATTERN_REST",
        PatternTermBrace => "PATTERN_TERM_BRACE",
        PatternTermBracket => "PATTERN_TERM_BRACKET",
        PatternTermParen => "PATTERN_TERM_PAREN",
        PipepipeeqMultiAssign => "PIPEPIPEEQ_MULTI_ASSIGN",
        RegexpEncodingOptionMismatch => "REGEXP_ENCODING_OPTION_MISMATCH",
        RegexpIncompatCharEncoding => "REGEXP_INCOMPAT_CHAR_ENCODING",
        RegexpInvalidUnicodeRange => "REGEXP_INVALID_UNICODE_RANGE",
        RegexpNonEscapedMbc => "REGEXP_NON_ESCAPED_MBC",
        RegexpParseError => "REGEXP_PARSE_ERROR",
        RegexpTerm => "REGEXP_TERM",
        RegexpUnknownOptions => "REGEXP_UNKNOWN_OPTIONS",
        RegexpUtf8CharNonUtf8Regexp => "REGEXP_UTF8_CHAR_NON_UTF8_REGEXP",
        RescueExpression => "RESCUE_EXPRESSION",
        RescueModifierValue => "RESCUE_MODIFIER_VALUE",
        RescueTerm => "RESCUE_TERM",
        RescueVariable => "RESCUE_VARIABLE",
        ReturnInvalid => "RETURN_INVALID",
        ScriptNotFound => "SCRIPT_NOT_FOUND",
        SingletonForLiterals => "SINGLETON_FOR_LITERALS",
        StatementAlias => "STATEMENT_ALIAS",
        StatementPostexeEnd => "STATEMENT_POSTEXE_END",
        StatementPreexeBegin => "STATEMENT_PREEXE_BEGIN",
        StatementUndef => "STATEMENT_UNDEF",
        StringConcatenation => "STRING_CONCATENATION",
        StringInterpolatedTerm => "STRING_INTERPOLATED_TERM",
        StringLiteralEof => "STRING_LITERAL_EOF",
        StringLiteralTerm => "STRING_LITERAL_TERM",
        SymbolInvalid => "SYMBOL_INVALID",
        SymbolTermDynamic => "SYMBOL_TERM_DYNAMIC",
        SymbolTermInterpolated => "SYMBOL_TERM_INTERPOLATED",
        TernaryColon => "TERNARY_COLON",
        TernaryExpressionFalse => "TERNARY_EXPRESSION_FALSE",
        TernaryExpressionTrue => "TERNARY_EXPRESSION_TRUE",
        UnaryDisallowed => "UNARY_DISALLOWED",
        UnaryReceiver => "UNARY_RECEIVER",
        UndefArgument => "UNDEF_ARGUMENT",
        UnexpectedBlockArgument => "UNEXPECTED_BLOCK_ARGUMENT",
        UnexpectedIndexBlock => "UNEXPECTED_INDEX_BLOCK",
        UnexpectedIndexKeywords => "UNEXPECTED_INDEX_KEYWORDS",
        UnexpectedLabel => "UNEXPECTED_LABEL",
        UnexpectedMultiWrite => "UNEXPECTED_MULTI_WRITE",
        UnexpectedRangeOperator => "UNEXPECTED_RANGE_OPERATOR",
        UnexpectedSafeNavigation => "UNEXPECTED_SAFE_NAVIGATION",
        UnexpectedTokenCloseContext => "UNEXPECTED_TOKEN_CLOSE_CONTEXT",
        UnexpectedTokenIgnore => "UNEXPECTED_TOKEN_IGNORE",
        UntilTerm => "UNTIL_TERM",
        VoidExpression => "VOID_EXPRESSION",
        WhileTerm => "WHILE_TERM",
        WriteTargetInMethod => "WRITE_TARGET_IN_METHOD",
        WriteTargetReadonly => "WRITE_TARGET_READONLY",
        WriteTargetUnexpected => "WRITE_TARGET_UNEXPECTED",
        XstringTerm => "XSTRING_TERM",
    }
}

const _: () = assert!(ErrorType::ALL.len() == ErrorType::COUNT as usize);

impl ErrorType {
    /// Number of error types; also the wire code of the first warning type.
    pub const COUNT: u32 = 289;

    /// Look up a wire code.
    pub fn new(code: u32) -> Option<Self> {
        ErrorType::ALL.get(usize::try_from(code).ok()?).copied()
    }

    /// Raw wire code.
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }
}

diagnostic_types! {
    /// Warning type, indexed by its wire code minus [`ErrorType::COUNT`].
    WarningType {
        AmbiguousBinaryOperator => "AMBIGUOUS_BINARY_OPERATOR",
        AmbiguousFirstArgumentMinus => "AMBIGUOUS_FIRST_ARGUMENT_MINUS",
        AmbiguousFirstArgumentPlus => "AMBIGUOUS_FIRST_ARGUMENT_PLUS",
        AmbiguousPrefixAmpersand => "AMBIGUOUS_PREFIX_AMPERSAND",
        AmbiguousPrefixStar => "AMBIGUOUS_PREFIX_STAR",
        AmbiguousPrefixStarStar => "AMBIGUOUS_PREFIX_STAR_STAR",
        AmbiguousSlash => "AMBIGUOUS_SLASH",
        ComparisonAfterComparison => "COMPARISON_AFTER_COMPARISON",
        DotDotDotEol => "DOT_DOT_DOT_EOL",
        DuplicatedHashKey => "DUPLICATED_HASH_KEY",
        DuplicatedWhenClause => "DUPLICATED_WHEN_CLAUSE",
        EqualInConditional => "EQUAL_IN_CONDITIONAL",
        EqualInConditional33 => "EQUAL_IN_CONDITIONAL_3_3",
        EndInMethod => "END_IN_METHOD",
        FloatOutOfRange => "FLOAT_OUT_OF_RANGE",
        IgnoredFrozenStringLiteral => "IGNORED_FROZEN_STRING_LITERAL",
        IndentationMismatch => "INDENTATION_MISMATCH",
        IntegerInFlipFlop => "INTEGER_IN_FLIP_FLOP",
        InvalidCharacter => "INVALID_CHARACTER",
        InvalidMagicCommentValue => "INVALID_MAGIC_COMMENT_VALUE",
        InvalidNumberedReference => "INVALID_NUMBERED_REFERENCE",
        KeywordEol => "KEYWORD_EOL",
        LiteralInConditionDefault => "LITERAL_IN_CONDITION_DEFAULT",
        LiteralInConditionVerbose => "LITERAL_IN_CONDITION_VERBOSE",
        ShareableConstantValueLine => "SHAREABLE_CONSTANT_VALUE_LINE",
        ShebangCarriageReturn => "SHEBANG_CARRIAGE_RETURN",
        UnexpectedCarriageReturn => "UNEXPECTED_CARRIAGE_RETURN",
        UnreachableStatement => "UNREACHABLE_STATEMENT",
        UnusedLocalVariable => "UNUSED_LOCAL_VARIABLE",
        VoidStatement => "VOID_STATEMENT",
    }
}

impl WarningType {
    /// Map a raw wire code (already offset by the error count) to a warning.
    pub fn from_code(code: u32) -> Option<Self> {
        let index = code.checked_sub(ErrorType::COUNT)?;
        WarningType::ALL.get(usize::try_from(index).ok()?).copied()
    }

    /// Raw wire code.
    pub fn code(self) -> u32 {
        ErrorType::COUNT + self as u32
    }
}

/// Severity of a syntax error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorLevel {
    /// Ordinary syntax error.
    Syntax,
    /// Error in the command-line arguments given to the parser.
    Argument,
    /// Error loading the file (for example an unreadable encoding).
    Load,
}

impl ErrorLevel {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(ErrorLevel::Syntax),
            1 => Some(ErrorLevel::Argument),
            2 => Some(ErrorLevel::Load),
            _ => None,
        }
    }
}

/// Severity of a syntax warning.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WarningLevel {
    /// Always emitted.
    Default,
    /// Emitted only in verbose mode.
    Verbose,
}

impl WarningLevel {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(WarningLevel::Default),
            1 => Some(WarningLevel::Verbose),
            _ => None,
        }
    }
}

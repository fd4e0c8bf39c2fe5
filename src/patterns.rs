//! Declarative clause table for judgments of the superior courts.
//!
//! Each entry lists its detection rules in priority order (the first rule that matches wins) and
//! the indicators that mark a matched span as corrupted. Rules are compiled case-insensitive and
//! multi-line by the registry; indicators are compiled verbatim and only ever run against the
//! matched span.

/// Day, month and year separated by `.`, `/` or `-`.
macro_rules! date_pattern {
    () => {
        r"\d{1,2}[./-]\d{1,2}[./-](?:19|20)?\d{2,4}"
    };
}

/// One detection rule as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSource {
    pub pattern: &'static str,
    /// Trailing context that must follow the match but is not part of the reported span.
    pub followed_by: Option<&'static str>,
}

pub const fn rule(pattern: &'static str) -> RuleSource {
    RuleSource { pattern, followed_by: None }
}

pub const fn rule_followed_by(pattern: &'static str, context: &'static str) -> RuleSource {
    RuleSource { pattern, followed_by: Some(context) }
}

#[derive(Debug, Clone, Copy)]
pub struct ClauseSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub patterns: &'static [RuleSource],
    pub corruption_indicators: &'static [&'static str],
    /// Report a corrupted match as its whole enclosing line.
    pub expand_line_on_corruption: bool,
}

const ADDRESS_ROAD: &str = r"No\.\s*[\d/A-Z,-]+.*?(?:Road|Street|Lane|Avenue|Mawatha|Place)";
const ADDRESS_TOWNS: &str = r"No\.\s*[\d/A-Z,-]+,\s*[A-Z][a-z]+(?:,\s*[A-Z][a-z]+){1,3}";
const ALL_OF_TOWNS: &str = r"All\s+of\s+[A-Z][a-z]+(?:,\s*[A-Z][a-z]+)*";
const CIVIL_CRIMINAL_JURISDICTION: &str =
    r"exercising\s+its\s+(?:Civil|Criminal)\s+(?:Appellate\s+)?Jurisdiction";

pub static CLAUSE_SPECS: &[ClauseSpec] = &[
    ClauseSpec {
        key: "CourtTitle",
        name: "Court Title",
        description: "The title of the court where the case was heard",
        patterns: &[
            rule(r"^\s{0,10}IN\s+THE\s+(?:SUPREME|HIGH|DISTRICT|MAGISTRATE'?S?)\s+COURT[^\n]*"),
            rule(r"^\s*COURT\s+OF\s+APPEAL[^\n]*"),
        ],
        corruption_indicators: &[
            r"[=@$%!&*]{2,}",
            r"#{2,}",
            r"[A-Z]{2,}[=@#$%!&*]+[A-Z]",
            r"\x{FFFD}",
            r"[A-Z]+[#@=]+[A-Z]+",
        ],
        expand_line_on_corruption: true,
    },
    ClauseSpec {
        key: "CaseNumber",
        name: "Case Number",
        description: "The case number assigned to the case",
        patterns: &[
            rule(r"(?:SC|CA|HC|HCCA|HCB|WP|DC|MC)[^\n]{0,80}?(?:Appeal|Application|Case)\s+No[:.\s]+[A-Z0-9/\\-]+"),
            rule(r"[A-Z]{2,4}\s*[/.-]?\s*[A-Z]?\d+[A-Z]*(?:[/.-]\d+[A-Z]*){0,3}"),
        ],
        corruption_indicators: &[r"###", r"XXX", r"\[CORRUPTED:", r"SC/###"],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "CaseYear",
        name: "Case Year",
        description: "The year the case was filed",
        patterns: &[rule(r"\b(?:19\d{2}|20\d{2})\b"), rule(r"[/\\-]\d{4}")],
        corruption_indicators: &[r"####", r"XXXX"],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "BeforeBench",
        name: "Before/Bench",
        description: "The label indicating the bench composition",
        patterns: &[
            rule(r"^\s*(?:Before|Coram)\s*:\s*"),
            rule(r"^\s*(?:Before|Coram)\s*:?\s*$"),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "JudgeNames",
        name: "Judge Names",
        description: "Names of judges presiding over the case",
        patterns: &[
            rule(r"(?:Hon\.?\s*)?(?:Justice\s+)?[A-Z][a-z]+(?:\s+[A-Z]\.?\s*[A-Z][a-z]+)+,?\s*(?:PC,?\s*)?[CJ]\.?"),
            rule(r"[A-Z][a-z]+\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*,?\s*J\.?"),
        ],
        corruption_indicators: &[r"#{2,}", r"[=@$%!&*]{2,}", r"\[MISSING:"],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "JudgeSignature",
        name: "Judge Signature",
        description: "Judge's signature at the end of judgment",
        patterns: &[
            rule(r"JUDGE\s+OF\s+THE\s+(?:SUPREME|APPEAL|HIGH)\s+COURT"),
            rule(r"(?:JUDGE|CHIEF\s+JUSTICE)\s+OF\s+THE\s+(?:SUPREME|APPEAL|HIGH)\s+COURT"),
        ],
        corruption_indicators: &[r"\[MISSING:.*Signature", r"Signature required"],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "ArguedOn",
        name: "Argued On",
        description: "Date when the case was argued",
        patterns: &[
            rule(concat!(r"Argued\s+On\s*[:\-;.]?\s*\n?\s*", date_pattern!())),
            rule(r"Argued\s+On\s*[:\-;.]"),
        ],
        corruption_indicators: &[r"##\.", r"[Oo][Oo]", r"[Tt][Tt]"],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "DecidedOn",
        name: "Decided On",
        description: "Date when the judgment was delivered",
        patterns: &[
            rule(concat!(r"(?:Decided|Delivered)\s+On\s*[:\-;.]?\s*\n?\s*", date_pattern!())),
            rule(r"(?:Decided|Delivered)\s+On\s*[:\-;.]"),
        ],
        corruption_indicators: &[r"##\.", r"[Oo][Oo]", r"[Tt][Tt]"],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "Petitioner",
        name: "Petitioner",
        description: "The party filing the petition/appeal",
        patterns: &[
            rule(r"(?:PETITIONER|APPELLANT|PLAINTIFF)S?\s*$"),
            rule(r"(?:Petitioner|Appellant|Plaintiff)[:\s]*\n\s*[A-Z][^\n]+"),
            rule(r"^\s*PLAINTIFFS?\s*$"),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "Respondent",
        name: "Respondent",
        description: "The opposing party in the case",
        patterns: &[
            rule(r"(?:RESPONDENT|DEFENDANT)S?\s*$"),
            rule(r"(?:Respondent|Defendant)[:\s]*\n\s*[A-Z][^\n]+"),
            rule(r"-VS-"),
            rule(r"^\s*-vs-\s*$"),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "PetitionerBlock",
        name: "Petitioner Block",
        description: "Full petitioner details including name and address",
        patterns: &[
            rule_followed_by(r"(?:PLAINTIFF|PETITIONER|APPELLANT)S?\s*$.*?", r"^Vs?\.?$"),
            rule_followed_by(
                r"(?s)(?:PLAINTIFF|PETITIONER|APPELLANT)S?\s*\n(?:.*?\n){1,20}?",
                r"^\s*(?:v\.|vs|versus)\s*$",
            ),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "RespondentBlock",
        name: "Respondent Block",
        description: "Full respondent details including name and address",
        patterns: &[
            rule(r"(?s)^\s*(?:v\.|vs|versus)\s*$.*?(?:DEFENDANT|RESPONDENT)S?\s*$"),
            rule_followed_by(
                r"(?s)^\s*(?:v\.|vs|versus)\s*$(?:.*?\n){1,20}?",
                r"^(?:DEFENDANT|RESPONDENT)S?\s*$",
            ),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "PlaintiffAddress",
        name: "Plaintiff Address",
        description: "Address of the plaintiff",
        patterns: &[
            rule(ADDRESS_ROAD),
            rule(ADDRESS_TOWNS),
            rule(ALL_OF_TOWNS),
            rule(r"\d+\.\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\."),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "DefendantAddress",
        name: "Defendant Address",
        description: "Address of the defendant",
        patterns: &[rule(ADDRESS_ROAD), rule(ADDRESS_TOWNS), rule(ALL_OF_TOWNS)],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "CounselSection",
        name: "Counsel Section",
        description: "Section listing counsel for parties",
        patterns: &[rule(r"^\s*Counsel\s*:\s*")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "CounselForAppellant",
        name: "Counsel for Appellant",
        description: "Counsel representing the appellant",
        patterns: &[rule(r"^.*?for\s+(?:the\s+)?(?:petitioner|appellant|plaintiff)")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "CounselForRespondent",
        name: "Counsel for Respondent",
        description: "Counsel representing the respondent",
        patterns: &[rule(r"^.*?for\s+(?:the\s+)?(?:respondent|defendant)")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "AppealType",
        name: "Appeal Type",
        description: "Type of appeal (Civil, Criminal, etc.)",
        patterns: &[
            rule(r"(?:Civil|Criminal|Fundamental\s+Rights)\s+(?:appeal|application)"),
            rule(r"Application\s+for\s+Leave\s+to\s+Appeal"),
            rule(CIVIL_CRIMINAL_JURISDICTION),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "LowerCourtNumber",
        name: "Lower Court Number",
        description: "Case number from the lower court",
        patterns: &[
            rule(r"(?:District|Magistrate'?s?|D\.C\.|M\.C\.)\s+(?:Court)?.*?(?:No|Case)[:.\s]+[A-Z0-9/\\-]+"),
            rule(r"Provincial\s+High\s+Court.*?holden\s+at\s+[A-Z][a-z]+"),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "MatterDescription",
        name: "Matter Description",
        description: "Description of the matter being heard",
        patterns: &[rule(r"In\s+the\s+matter\s+of")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "LegalProvisionsCited",
        name: "Legal Provisions Cited",
        description: "Sections, Articles, or Acts cited",
        patterns: &[
            rule(r"Section\s+\d+(?:\s*\([a-z0-9]+\))?"),
            rule(r"(?:Article|Act)\s+(?:No\.?\s*)?\d+"),
            rule(r"Article\s+\d+\s+of\s+the\s+Constitution"),
            rule(r"Act\s+No\.\s*\d+\s+of\s+\d{4}"),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "Jurisdiction",
        name: "Jurisdiction",
        description: "Reference to court's jurisdiction",
        patterns: &[
            rule(r"\bjurisdiction\b"),
            rule(CIVIL_CRIMINAL_JURISDICTION),
            rule(r"Appellate\s+Jurisdiction"),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "ClaimAmount",
        name: "Claim Amount",
        description: "Monetary amount claimed",
        patterns: &[
            rule(r"(?:Rs\.?|Rupees)\s*[\d,]+(?:[/.\-=]\d*)?"),
            rule(r"(?:US\s*)?(?:Dollars?|USD)\s*[\d,]+(?:\.\d+)?"),
        ],
        corruption_indicators: &[r"###", r"XXX"],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "InstructedBy",
        name: "Instructed By",
        description: "Instructing attorney information",
        patterns: &[rule(r"(?:Instructed|Instructing)\s+(?:by|attorney|solicitor)")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "PrayerForRelief",
        name: "Prayer for Relief",
        description: "Relief sought by the petitioner",
        patterns: &[
            rule(r"(?:prayer|relief|order)[:\s]+[^\n]+"),
            rule(r"(?:seeking|praying\s+for|claiming)[^\n]+"),
        ],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "Plaintiff",
        name: "Plaintiff",
        description: "Plaintiff party name",
        patterns: &[rule(r"Plaintiff[:\s]*[^\n]+")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "Defendant",
        name: "Defendant",
        description: "Defendant party name",
        patterns: &[rule(r"Defendant[:\s]*[^\n]+")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "PlaintiffBlock",
        name: "Plaintiff Block",
        description: "Complete plaintiff information block",
        patterns: &[rule(r"PLAINTIFFS?\s*\n(?:.*?\n){1,10}")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "DefendantBlock",
        name: "Defendant Block",
        description: "Complete defendant information block",
        patterns: &[rule(r"(?:RESPONDENT|DEFENDANT)S?\s*\n(?:.*?\n){1,15}")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
];

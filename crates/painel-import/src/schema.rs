//! Static schema descriptors for the four upload categories.
//!
//! Each descriptor parameterizes the shared pipeline: which logical fields to
//! extract, the ranked header substrings that locate each field, which fields
//! anchor the sheet (all unresolved is fatal), which fields make a row count
//! as data, and the prefix used to synthesize missing ids.
//!
//! Candidate lists mix Portuguese and English header spellings, accented and
//! unaccented, because that is what uploaded sheets actually contain.

/// How a field's cell values are coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Text,
    Number,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Ranked candidate substrings, highest priority first. An earlier
    /// candidate matching anywhere in the header row beats a later candidate
    /// in an earlier column.
    pub candidates: &'static [&'static str],
    /// Value used when the column is unresolved or the cell is blank.
    pub default: &'static str,
}

impl FieldSpec {
    const fn text(name: &'static str, candidates: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            candidates,
            default: "",
        }
    }

    const fn text_with_default(
        name: &'static str,
        candidates: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            candidates,
            default,
        }
    }

    const fn number(name: &'static str, candidates: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
            candidates,
            default: "",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Schema {
    /// Short label used in log events and error messages.
    pub label: &'static str,
    pub fields: &'static [FieldSpec],
    /// Fields whose collective absence makes the sheet unusable. Empty means
    /// the variant relies on the per-row identity check alone.
    pub anchors: &'static [&'static str],
    /// A row is kept only if at least one of these fields is non-empty.
    pub identity: &'static [&'static str],
    /// `Some("APR")` synthesizes `APR-<row>` ids for rows without one.
    pub id_prefix: Option<&'static str>,
}

impl Schema {
    pub fn field_position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

const ID_CANDIDATES: &[&str] = &["id", "código", "codigo"];
const ENGENHEIRO_CANDIDATES: &[&str] = &["engenheiro", "engineer", "responsável", "responsavel"];
const PARCEIRO_CANDIDATES: &[&str] = &["parceiro", "client", "customer"];
const VALOR_CANDIDATES: &[&str] = &["valor", "value", "price", "preço", "preco"];
const STATUS_CANDIDATES: &[&str] = &["status", "situação", "situacao", "estado"];
const OBSERVACOES_CANDIDATES: &[&str] = &[
    "observações",
    "observacoes",
    "notes",
    "comentários",
    "comentarios",
];

pub(crate) static LEDGER: Schema = Schema {
    label: "ledger",
    fields: &[
        FieldSpec::text(
            "orcamento",
            &["orçamento", "orcamento", "budget", "orç", "orc"],
        ),
        FieldSpec::text("os", &["os", "ordem", "order", "service", "serviço"]),
        FieldSpec::text(
            "nome_parceiro",
            &["parceiro", "nome", "partner", "client", "name"],
        ),
        FieldSpec::text(
            "responsavel",
            &["responsável", "responsavel", "responsible", "resp"],
        ),
        FieldSpec::number("valor", VALOR_CANDIDATES),
        FieldSpec::text(
            "descricao",
            &["descrição", "descricao", "tipo", "description", "type", "desc"],
        ),
    ],
    anchors: &["responsavel", "orcamento", "os"],
    identity: &["orcamento", "os", "responsavel", "nome_parceiro"],
    id_prefix: None,
};

pub(crate) static PENDING_APPROVAL: Schema = Schema {
    label: "pending-approval",
    fields: &[
        FieldSpec::text("id", ID_CANDIDATES),
        FieldSpec::text("orcamento", &["orçamento", "orcamento", "budget"]),
        FieldSpec::text("parceiro", PARCEIRO_CANDIDATES),
        FieldSpec::text("engenheiro", ENGENHEIRO_CANDIDATES),
        FieldSpec::number("valor", VALOR_CANDIDATES),
        FieldSpec::text("status", STATUS_CANDIDATES),
        FieldSpec::text("data", &["data", "date"]),
    ],
    anchors: &[],
    identity: &["orcamento", "parceiro", "engenheiro"],
    id_prefix: Some("APR"),
};

pub(crate) static RETURN: Schema = Schema {
    label: "return",
    fields: &[
        FieldSpec::text("id", ID_CANDIDATES),
        FieldSpec::text("parceiro", PARCEIRO_CANDIDATES),
        FieldSpec::text(
            "equipamento",
            &["equipamento", "equipment", "produto", "product"],
        ),
        FieldSpec::text("engenheiro", ENGENHEIRO_CANDIDATES),
        // "data entrada" outranks the generic "data" so a sheet carrying both
        // a generic date column and an entry-date column resolves to the
        // specific one.
        FieldSpec::text("data_entrada", &["data entrada", "entrada", "data", "date"]),
        FieldSpec::text(
            "motivo_devolucao",
            &["motivo devolução", "motivo devolucao", "motivo", "reason"],
        ),
        FieldSpec::text_with_default("status", STATUS_CANDIDATES, "Pendente"),
        FieldSpec::text("observacoes", OBSERVACOES_CANDIDATES),
    ],
    anchors: &[],
    identity: &["parceiro", "equipamento", "engenheiro"],
    id_prefix: Some("DEV"),
};

pub(crate) static INTERNAL_TRANSFER: Schema = Schema {
    label: "internal-transfer",
    fields: &[
        FieldSpec::text("id", ID_CANDIDATES),
        FieldSpec::text("orcamento", &["orçamento", "orcamento", "budget"]),
        FieldSpec::text("parceiro", PARCEIRO_CANDIDATES),
        FieldSpec::text("engenheiro", ENGENHEIRO_CANDIDATES),
        FieldSpec::text(
            "tipo_movimentacao",
            &["tipo movimentação", "tipo movimentacao", "tipo", "type"],
        ),
        FieldSpec::text(
            "data_movimentacao",
            &["data movimentação", "data movimentacao", "data", "date"],
        ),
        FieldSpec::text_with_default("status", STATUS_CANDIDATES, "Pendente"),
        FieldSpec::text("observacoes", OBSERVACOES_CANDIDATES),
    ],
    anchors: &[],
    identity: &["orcamento", "parceiro", "engenheiro"],
    id_prefix: Some("MOV"),
};

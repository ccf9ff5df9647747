/// Reports served by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Divergencias,
    Avarias,
    Qualidade,
    Devolucoes,
}

impl ReportKind {
    /// Key sent as `type` to `/fetch_data`
    pub fn code(&self) -> &'static str {
        match self {
            ReportKind::Divergencias => "divergencias",
            ReportKind::Avarias => "avarias",
            ReportKind::Qualidade => "qualidade",
            ReportKind::Devolucoes => "devolucoes",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::Divergencias => "Divergências",
            ReportKind::Avarias => "Avarias",
            ReportKind::Qualidade => "Qualidade",
            ReportKind::Devolucoes => "Devoluções",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Divergencias => "Divergências de recebimento por período de criação",
            ReportKind::Avarias => "Avarias na entrega - Central de Produção RJ",
            ReportKind::Qualidade => "Chamados de qualidade (LOG) - Central de Produção RJ",
            ReportKind::Devolucoes => "Devoluções ao CD Pavuna RJ (CD03) por validade",
        }
    }

    /// Font Awesome icon class of the report card
    pub fn icon(&self) -> &'static str {
        match self {
            ReportKind::Divergencias => "fas fa-balance-scale",
            ReportKind::Avarias => "fas fa-box-open",
            ReportKind::Qualidade => "fas fa-check-circle",
            ReportKind::Devolucoes => "fas fa-undo",
        }
    }

    /// Only divergencias is filtered by creation date
    pub fn requires_date_range(&self) -> bool {
        matches!(self, ReportKind::Divergencias)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.code() == code)
    }

    pub fn all() -> Vec<ReportKind> {
        vec![
            ReportKind::Divergencias,
            ReportKind::Avarias,
            ReportKind::Qualidade,
            ReportKind::Devolucoes,
        ]
    }
}

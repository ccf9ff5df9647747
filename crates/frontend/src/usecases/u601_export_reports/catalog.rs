//! Which control runs which report.
use contracts::usecases::u601_export_reports::ReportKind;

/// A report card and the id of its action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportBinding {
    pub control_id: &'static str,
    pub kind: ReportKind,
    pub button_label: &'static str,
}

pub const REPORT_CARDS: [ReportBinding; 4] = [
    ReportBinding {
        control_id: "btn-divergencias",
        kind: ReportKind::Divergencias,
        button_label: "Buscar Divergências",
    },
    ReportBinding {
        control_id: "btn-avarias",
        kind: ReportKind::Avarias,
        button_label: "Buscar Avarias",
    },
    ReportBinding {
        control_id: "btn-qualidade",
        kind: ReportKind::Qualidade,
        button_label: "Buscar Qualidade",
    },
    ReportBinding {
        control_id: "btn-devolucoes",
        kind: ReportKind::Devolucoes,
        button_label: "Buscar Devoluções",
    },
];

/// Card bound to a `data-type` value
pub fn binding_for(report_type: &str) -> Option<&'static ReportBinding> {
    let kind = ReportKind::from_code(report_type)?;
    REPORT_CARDS.iter().find(|binding| binding.kind == kind)
}

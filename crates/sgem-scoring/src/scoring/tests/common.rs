use chrono::NaiveDate;

use crate::scoring::domain::{
    Budget, Indicator, IndicatorId, Measurement, MeasurementStatus, Objective, ObjectiveId,
    ObjectiveStatus, Perspective, PerspectiveId, PerspectiveType, Polarity, Project,
    ProjectHealth, ProjectId, ProjectMethodology, ProjectStatus,
};
use crate::scoring::ScorecardSnapshot;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn perspective(id: &str, name: &str, perspective_type: PerspectiveType) -> Perspective {
    Perspective {
        id: PerspectiveId::new(id),
        name: name.to_string(),
        description: String::new(),
        perspective_type,
        color: String::new(),
        order: 0,
    }
}

pub(super) fn perspectives() -> Vec<Perspective> {
    vec![
        perspective("p1", "Financeira", PerspectiveType::Financial),
        perspective("p2", "Cidadãos e Sociedade", PerspectiveType::Customer),
        perspective("p3", "Processos Internos", PerspectiveType::Processes),
        perspective("p4", "Aprendizado e Crescimento", PerspectiveType::Learning),
    ]
}

pub(super) fn objective(
    id: &str,
    code: &str,
    title: &str,
    description: &str,
    perspective_id: &str,
    progress: u8,
) -> Objective {
    Objective {
        id: ObjectiveId::new(id),
        code: code.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        perspective_id: PerspectiveId::new(perspective_id),
        owner_id: None,
        status: ObjectiveStatus::Active,
        progress,
        deadline: None,
    }
}

pub(super) fn objectives() -> Vec<Objective> {
    vec![
        objective(
            "o1",
            "FIN-01",
            "Aumentar Arrecadação Própria",
            "Otimizar IPTU e ISS",
            "p1",
            75,
        ),
        objective(
            "o2",
            "CID-01",
            "Melhorar Qualidade da Saúde",
            "Reduzir filas",
            "p2",
            60,
        ),
        objective(
            "o3",
            "PRO-01",
            "Digitalizar Serviços",
            "Implantar Processo Eletrônico",
            "p3",
            90,
        ),
        objective(
            "o4",
            "APR-01",
            "Capacitar Servidores",
            "Treinamento contínuo",
            "p4",
            40,
        ),
    ]
}

pub(super) fn indicator(
    id: &str,
    objective_id: &str,
    target: f64,
    current_value: Option<f64>,
    polarity: Polarity,
) -> Indicator {
    Indicator {
        id: IndicatorId::new(id),
        code: id.to_uppercase(),
        name: format!("Indicator {id}"),
        objective_id: ObjectiveId::new(objective_id),
        unit: "%".to_string(),
        frequency: "MONTHLY".to_string(),
        baseline: 0.0,
        target,
        current_value,
        polarity,
        source: String::new(),
        formula: None,
        measurements: Vec::new(),
        targets: Vec::new(),
    }
}

/// Digitalisation index (90 of 100) and health waiting time (25 against 15 days).
pub(super) fn indicators() -> Vec<Indicator> {
    let mut digital = indicator("i1", "o3", 100.0, Some(90.0), Polarity::HigherBetter);
    digital.code = "IND-01".to_string();
    digital.name = "Índice de Digitalização".to_string();
    digital.baseline = 20.0;

    let mut waiting = indicator("i2", "o2", 15.0, Some(25.0), Polarity::LowerBetter);
    waiting.code = "IND-02".to_string();
    waiting.name = "Tempo Médio de Espera (Saúde)".to_string();
    waiting.unit = "Dias".to_string();
    waiting.baseline = 45.0;

    vec![digital, waiting]
}

pub(super) fn measurement(when: NaiveDate, value: f64, status: Option<MeasurementStatus>) -> Measurement {
    Measurement {
        id: format!("m-{when}"),
        date: when,
        value,
        evidence_url: None,
        status,
    }
}

pub(super) fn project(
    id: &str,
    status: ProjectStatus,
    progress: f64,
    approved: f64,
    spent: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Project {
    Project {
        id: ProjectId::new(id),
        code: id.to_uppercase(),
        title: format!("Project {id}"),
        description: String::new(),
        manager: String::new(),
        sponsor: String::new(),
        status,
        health: ProjectHealth::Healthy,
        methodology: Some(ProjectMethodology::Hybrid),
        progress,
        start_date: start,
        end_date: end,
        baseline_start_date: None,
        baseline_end_date: None,
        budget: Budget {
            estimated: approved,
            approved,
            spent,
            committed: spent,
        },
        strategic_objective_id: None,
        cpi: None,
        spi: None,
    }
}

pub(super) fn projects() -> Vec<Project> {
    let mut records = project(
        "proj1",
        ProjectStatus::InProgress,
        45.0,
        480_000.0,
        210_000.0,
        date(2025, 1, 15),
        date(2025, 12, 20),
    );
    records.code = "PE-2025-01".to_string();
    records.strategic_objective_id = Some(ObjectiveId::new("o3"));

    let mut school = project(
        "proj2",
        ProjectStatus::Paused,
        30.0,
        800_000.0,
        400_000.0,
        date(2025, 2, 1),
        date(2025, 8, 30),
    );
    school.code = "PE-2025-02".to_string();
    school.strategic_objective_id = Some(ObjectiveId::new("o2"));

    let mut portal = project(
        "proj3",
        ProjectStatus::Completed,
        100.0,
        150_000.0,
        145_000.0,
        date(2025, 1, 10),
        date(2025, 4, 30),
    );
    portal.code = "PE-2025-03".to_string();
    portal.strategic_objective_id = Some(ObjectiveId::new("o1"));

    vec![records, school, portal]
}

pub(super) fn snapshot() -> ScorecardSnapshot {
    ScorecardSnapshot {
        perspectives: perspectives(),
        objectives: objectives(),
        indicators: indicators(),
        projects: projects(),
    }
}

//! Interface de linha de comando do Nexus baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (dashboard,
//! objective, project, matrix, assist) e a flag global `--verbose`. Os
//! enums de argumento são mapeados para os tipos de domínio em `main`.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::assistant::RequestType;
use crate::matrix::MatrixMode;
use crate::model::{Level, PhaseFilter, StatusFilter};

/// Nexus — rastreador pessoal de objetivos e projetos.
#[derive(Debug, Parser)]
#[command(name = "nexus", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Habilita diagnósticos detalhados no stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mostra o painel com resumo e registros recentes.
    Dashboard,

    /// Operações sobre objetivos.
    Objective {
        #[command(subcommand)]
        command: ObjectiveCommand,
    },

    /// Operações sobre projetos.
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    /// Exibe a matriz de priorização impacto/esforço.
    Matrix {
        /// Qual lista classificar.
        #[arg(long, value_enum, default_value_t = SourceArg::Objectives)]
        view: SourceArg,

        /// Grade 2x2 ou lista agrupada por quadrante.
        #[arg(long, value_enum, default_value_t = ModeArg::Matrix)]
        mode: ModeArg,
    },

    /// Asks the research assistant about an objective.
    Assist {
        /// Which of the five request types to run.
        #[arg(value_enum)]
        request: AssistArg,

        /// Objective title the assistant should reason about.
        #[arg(long)]
        title: String,

        /// Optional objective description for extra context.
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ObjectiveCommand {
    /// Lista objetivos, com busca e aba de status.
    List {
        /// Busca em título, descrição e tags.
        #[arg(long)]
        search: Option<String>,

        /// Aba de status.
        #[arg(long, value_enum, default_value_t = StatusArg::All)]
        status: StatusArg,
    },

    /// Mostra um objetivo pelo id.
    Show { id: String },

    /// Cria um objetivo.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "Medium")]
        priority: String,
        #[arg(long)]
        category: Option<String>,
        /// Data limite (AAAA-MM-DD).
        #[arg(long)]
        due: Option<NaiveDate>,
        #[arg(long, default_value_t = 0)]
        progress: u8,
        #[arg(long, default_value = "Not Started")]
        status: String,
        #[arg(long, value_enum)]
        impact: Option<LevelArg>,
        #[arg(long, value_enum)]
        effort: Option<LevelArg>,
        /// Tag associada; repita a flag para várias.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Edita um objetivo existente; flags ausentes mantêm o valor atual.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        due: Option<NaiveDate>,
        #[arg(long)]
        progress: Option<u8>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, value_enum)]
        impact: Option<LevelArg>,
        #[arg(long, value_enum)]
        effort: Option<LevelArg>,
        /// Substitui as tags quando presente.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// Lista projetos, com busca e aba de fase.
    List {
        /// Busca em título, descrição e equipe.
        #[arg(long)]
        search: Option<String>,

        /// Aba de fase.
        #[arg(long, value_enum, default_value_t = PhaseArg::All)]
        phase: PhaseArg,
    },

    /// Mostra um projeto pelo id.
    Show { id: String },

    /// Cria um projeto.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        phase: Option<String>,
        #[arg(long)]
        team: Option<String>,
        #[arg(long, default_value_t = 1)]
        members: u32,
        /// Início (AAAA-MM-DD).
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Término (AAAA-MM-DD).
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long, default_value_t = 0)]
        progress: u8,
        #[arg(long, default_value = "Not Started")]
        status: String,
        #[arg(long, value_enum)]
        impact: Option<LevelArg>,
        #[arg(long, value_enum)]
        effort: Option<LevelArg>,
    },

    /// Edita um projeto existente; flags ausentes mantêm o valor atual.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        phase: Option<String>,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        members: Option<u32>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long)]
        progress: Option<u8>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, value_enum)]
        impact: Option<LevelArg>,
        #[arg(long, value_enum)]
        effort: Option<LevelArg>,
    },
}

/// Valor de eixo aceito pela CLI, mapeado para [`Level`] internamente.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LevelArg {
    High,
    Low,
}

impl LevelArg {
    /// Valor como a string de eixo armazenada pelo backend.
    pub fn as_wire(self) -> &'static str {
        match self {
            LevelArg::High => Level::High.as_str(),
            LevelArg::Low => Level::Low.as_str(),
        }
    }
}

/// Aba de status da lista de objetivos.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    All,
    InProgress,
    NotStarted,
    Completed,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => StatusFilter::All,
            StatusArg::InProgress => StatusFilter::InProgress,
            StatusArg::NotStarted => StatusFilter::NotStarted,
            StatusArg::Completed => StatusFilter::Completed,
        }
    }
}

/// Aba de fase da lista de projetos.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PhaseArg {
    All,
    Discovery,
    Planning,
    Implementation,
    Maintenance,
}

impl From<PhaseArg> for PhaseFilter {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::All => PhaseFilter::All,
            PhaseArg::Discovery => PhaseFilter::Discovery,
            PhaseArg::Planning => PhaseFilter::Planning,
            PhaseArg::Implementation => PhaseFilter::Implementation,
            PhaseArg::Maintenance => PhaseFilter::Maintenance,
        }
    }
}

/// Qual lista alimenta a matriz.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Objectives,
    Projects,
}

/// Modo de visualização da matriz.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Matrix,
    List,
}

impl From<ModeArg> for MatrixMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Matrix => MatrixMode::Matrix,
            ModeArg::List => MatrixMode::List,
        }
    }
}

/// Tipo de consulta do assistente.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AssistArg {
    Suggestions,
    Research,
    Feasibility,
    Timeline,
    Resources,
}

impl From<AssistArg> for RequestType {
    fn from(arg: AssistArg) -> Self {
        match arg {
            AssistArg::Suggestions => RequestType::Suggestions,
            AssistArg::Research => RequestType::Research,
            AssistArg::Feasibility => RequestType::Feasibility,
            AssistArg::Timeline => RequestType::Timeline,
            AssistArg::Resources => RequestType::Resources,
        }
    }
}

//! Interface de terminal do Nexus — listas, matriz 2x2 e saída colorida.
//!
//! Usa as crates `indicatif` para spinners de requisição e `console` para
//! estilização com cores. A [`Screen`] renderiza o painel, as listas, a
//! matriz de priorização e as respostas do assistente; erros viram uma
//! única linha estilizada (o equivalente do toast da aplicação original).

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::assistant::RequestType;
use crate::dashboard::DashboardSummary;
use crate::matrix::{MatrixBuckets, MatrixMode, Quadrant};
use crate::model::{MatrixItem, Objective, Project};

/// Largura de cada coluna da grade 2x2.
const QUADRANT_WIDTH: usize = 34;

/// Quantos registros recentes o painel mostra por lista.
const RECENT: usize = 3;

/// Saída estilizada do tracker no terminal.
pub struct Screen {
    // Estilos de prioridade: alta em vermelho, média em amarelo, baixa em verde.
    green: Style,
    red: Style,
    yellow: Style,
    cyan: Style,
    bold: Style,
    dim: Style,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
            cyan: Style::new().cyan().bold(),
            bold: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Exibe uma falha como uma única linha estilizada.
    pub fn error(&self, err: &anyhow::Error) {
        eprintln!("  {} {err:#}", self.red.apply_to("✗"));
    }

    /// Confirmação de escrita com o id atribuído pelo backend.
    pub fn saved(&self, message: &str, id: &str) {
        println!(
            "  {} {message} {}",
            self.green.apply_to("✓"),
            self.dim.apply_to(format!("({id})"))
        );
    }

    /// Painel com os números de destaque e os registros mais recentes.
    pub fn dashboard(
        &self,
        summary: &DashboardSummary,
        objectives: &[Objective],
        projects: &[Project],
    ) {
        println!("{}", self.bold.apply_to("─── Dashboard ───"));
        println!(
            "  Objectives: {} total, {} active, {} completed — {}",
            summary.objective_count,
            summary.active_objectives,
            summary.completed_objectives,
            self.green
                .apply_to(format!("{}% on track", summary.on_track_pct))
        );
        println!(
            "  Projects:   {} total, {} active, {} phases",
            summary.project_count, summary.active_projects, summary.phase_count
        );
        match summary.next_due {
            Some((date, days)) => println!(
                "  Next deadline: {date} {}",
                self.yellow.apply_to(format!("({days} days)"))
            ),
            None => println!("  Next deadline: {}", self.dim.apply_to("none")),
        }

        println!();
        println!("{}", self.bold.apply_to("Recent objectives"));
        if objectives.is_empty() {
            println!("  {}", self.dim.apply_to("(none yet)"));
        }
        for objective in objectives.iter().take(RECENT) {
            self.objective_line(objective);
        }

        println!();
        println!("{}", self.bold.apply_to("Recent projects"));
        if projects.is_empty() {
            println!("  {}", self.dim.apply_to("(none yet)"));
        }
        for project in projects.iter().take(RECENT) {
            self.project_line(project);
        }
    }

    /// Lista de objetivos filtrada.
    pub fn objectives(&self, items: &[Objective]) {
        if items.is_empty() {
            println!(
                "  {}",
                self.dim.apply_to(
                    "No objectives found matching your search. Try adjusting your \
                     filters or create a new objective."
                )
            );
            return;
        }
        for objective in items {
            self.objective_line(objective);
        }
    }

    /// Lista de projetos filtrada.
    pub fn projects(&self, items: &[Project]) {
        if items.is_empty() {
            println!(
                "  {}",
                self.dim.apply_to(
                    "No projects found matching your search. Try adjusting your \
                     filters or create a new project."
                )
            );
            return;
        }
        for project in items {
            self.project_line(project);
        }
    }

    fn objective_line(&self, o: &Objective) {
        let priority = self
            .priority_style(&o.priority)
            .apply_to(format!("[{}]", o.priority));
        let mut line = format!("  {priority} {} — {}%, {}", o.title, o.progress, o.status);
        if let Some(due) = o.due_date {
            line.push_str(&format!(", due {due}"));
        }
        println!("{line} {}", self.dim.apply_to(format!("({})", o.id)));
    }

    fn project_line(&self, p: &Project) {
        let mut line = format!("  {} — {}%, {}", p.title, p.progress, p.status);
        if let Some(phase) = &p.phase {
            line.push_str(&format!(", {phase}"));
        }
        if let Some(team) = &p.team {
            line.push_str(&format!(" [{team}]"));
        }
        println!("{line} {}", self.dim.apply_to(format!("({})", p.id)));
    }

    /// Detalhe de um objetivo.
    pub fn objective_detail(&self, o: &Objective) {
        println!("{}", self.bold.apply_to(&o.title));
        println!("  id:       {}", o.id);
        if let Some(description) = &o.description {
            println!("  about:    {description}");
        }
        println!(
            "  priority: {}",
            self.priority_style(&o.priority).apply_to(&o.priority)
        );
        if let Some(category) = &o.category {
            println!("  category: {category}");
        }
        println!("  status:   {} ({}%)", o.status, o.progress);
        if let Some(due) = o.due_date {
            println!("  due:      {due}");
        }
        if !o.tags.is_empty() {
            println!("  tags:     {}", o.tags.join(", "));
        }
        self.quadrant_line(&o.impact, &o.effort);
    }

    /// Detalhe de um projeto.
    pub fn project_detail(&self, p: &Project) {
        println!("{}", self.bold.apply_to(&p.title));
        println!("  id:       {}", p.id);
        if let Some(description) = &p.description {
            println!("  about:    {description}");
        }
        if let Some(phase) = &p.phase {
            println!("  phase:    {phase}");
        }
        if let Some(team) = &p.team {
            println!("  team:     {team} ({} members)", p.members);
        }
        println!("  status:   {} ({}%)", p.status, p.progress);
        if let Some(start) = p.start_date {
            println!("  start:    {start}");
        }
        if let Some(end) = p.end_date {
            println!("  end:      {end}");
        }
        self.quadrant_line(&p.impact, &p.effort);
    }

    fn quadrant_line(&self, impact: &str, effort: &str) {
        match Quadrant::classify(impact, effort) {
            Some(quadrant) => println!(
                "  quadrant: {} ({})",
                self.quadrant_style(quadrant).apply_to(quadrant.label()),
                quadrant.axes()
            ),
            None if impact.is_empty() && effort.is_empty() => {}
            None => println!(
                "  quadrant: {}",
                self.yellow
                    .apply_to(format!("unclassified (impact={impact:?}, effort={effort:?})"))
            ),
        }
    }

    /// Renderiza os baldes classificados como grade 2x2 ou lista agrupada.
    pub fn matrix<T: MatrixItem>(&self, buckets: &MatrixBuckets<'_, T>, mode: MatrixMode) {
        match mode {
            MatrixMode::Matrix => self.matrix_grid(buckets),
            MatrixMode::List => self.matrix_list(buckets),
        }
    }

    fn matrix_grid<T: MatrixItem>(&self, buckets: &MatrixBuckets<'_, T>) {
        let total = QUADRANT_WIDTH * 2 + 3;
        println!(
            "{}",
            self.bold
                .apply_to(format!("{:^total$}", "High Impact", total = total))
        );
        println!(
            "{}   {}",
            self.dim
                .apply_to(format!("{:^w$}", "Low Effort", w = QUADRANT_WIDTH)),
            self.dim
                .apply_to(format!("{:^w$}", "High Effort", w = QUADRANT_WIDTH))
        );
        self.grid_row(
            Quadrant::QuickWins,
            &buckets.quick_wins,
            Quadrant::MajorProjects,
            &buckets.major_projects,
        );
        self.grid_row(
            Quadrant::FillIns,
            &buckets.fill_ins,
            Quadrant::ThanklessTasks,
            &buckets.thankless_tasks,
        );
        println!(
            "{}",
            self.bold
                .apply_to(format!("{:^total$}", "Low Impact", total = total))
        );
        self.unclassified_section(&buckets.unclassified);
    }

    fn grid_row<T: MatrixItem>(
        &self,
        left_quadrant: Quadrant,
        left: &[&T],
        right_quadrant: Quadrant,
        right: &[&T],
    ) {
        let left_header = format!("{:<w$}", left_quadrant.label(), w = QUADRANT_WIDTH);
        println!(
            "{} │ {}",
            self.quadrant_style(left_quadrant).apply_to(left_header),
            self.quadrant_style(right_quadrant)
                .apply_to(right_quadrant.label())
        );

        let left_lines = card_lines(left);
        let right_lines = card_lines(right);
        for i in 0..left_lines.len().max(right_lines.len()) {
            let l = left_lines.get(i).map(String::as_str).unwrap_or("");
            let r = right_lines.get(i).map(String::as_str).unwrap_or("");
            println!("{l:<w$} │ {r}", w = QUADRANT_WIDTH);
        }
        println!();
    }

    fn matrix_list<T: MatrixItem>(&self, buckets: &MatrixBuckets<'_, T>) {
        if buckets.is_empty() {
            println!(
                "  {}",
                self.dim.apply_to(
                    "No items available. Create a new objective or project to get started."
                )
            );
            return;
        }
        for quadrant in Quadrant::ALL {
            let items = buckets.bucket(quadrant);
            // Seções vazias são omitidas na visão de lista.
            if items.is_empty() {
                continue;
            }
            println!(
                "{} {}",
                self.quadrant_style(quadrant)
                    .apply_to(format!("{} ({})", quadrant.label(), quadrant.axes())),
                self.dim.apply_to(format!("— {}", quadrant.hint()))
            );
            for line in card_lines(items) {
                println!("{line}");
            }
            println!();
        }
        self.unclassified_section(&buckets.unclassified);
    }

    fn unclassified_section<T: MatrixItem>(&self, items: &[&T]) {
        if items.is_empty() {
            return;
        }
        println!(
            "{}",
            self.yellow
                .apply_to("⚠ Unclassified (impact/effort outside high/low)")
        );
        for line in card_lines(items) {
            println!("{line}");
        }
    }

    /// Resposta do assistente, quebrada nas linhas do texto do modelo.
    pub fn assistant(&self, kind: RequestType, text: &str) {
        println!(
            "{}",
            self.cyan.apply_to(format!("─── {} ───", kind.label()))
        );
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            println!("  {line}");
        }
    }

    fn priority_style(&self, priority: &str) -> &Style {
        match priority.to_lowercase().as_str() {
            "high" => &self.red,
            "medium" => &self.yellow,
            "low" => &self.green,
            _ => &self.dim,
        }
    }

    fn quadrant_style(&self, quadrant: Quadrant) -> &Style {
        match quadrant {
            Quadrant::QuickWins => &self.green,
            Quadrant::MajorProjects => &self.cyan,
            Quadrant::FillIns => &self.bold,
            Quadrant::ThanklessTasks => &self.yellow,
        }
    }
}

/// Linhas de um balde: título truncado + badges, com marcador de item.
fn card_lines<T: MatrixItem>(items: &[&T]) -> Vec<String> {
    if items.is_empty() {
        return vec!["  (no items in this quadrant)".to_string()];
    }
    let mut lines = Vec::new();
    for item in items {
        lines.push(format!(
            "  • {}",
            truncate(item.title(), QUADRANT_WIDTH - 4)
        ));
        let badges = item.badges();
        if !badges.is_empty() {
            lines.push(truncate(
                &format!("    [{}]", badges.join("] [")),
                QUADRANT_WIDTH,
            ));
        }
    }
    lines
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

/// Indicador visual de uma requisição em andamento no terminal.
pub struct RequestSpinner {
    pb: ProgressBar,
}

impl RequestSpinner {
    /// Inicia o spinner com a mensagem da operação em curso.
    pub fn start(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    /// Encerra e limpa o spinner antes de imprimir o resultado.
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

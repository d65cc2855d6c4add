// ABOUTME: Fixed slide dataset for the Legalização e Infraestrutura deck
// ABOUTME: Every export and the live presentation read from this single ordered list

/// Three-way classification for a compliance status cell.
///
/// Any label other than "Sim" or "Não precisa" falls back to `Pending`,
/// including the empty string. Existing export output depends on this
/// fallback, so it is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Approved,
    NotNeeded,
    Pending,
}

impl Status {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Sim" => Status::Approved,
            "Não precisa" => Status::NotNeeded,
            _ => Status::Pending,
        }
    }

    /// Canonical text for the badge, used verbatim in every export format.
    pub fn label(self) -> &'static str {
        match self {
            Status::Approved => "Sim",
            Status::NotNeeded => "Não precisa",
            Status::Pending => "Protocolo",
        }
    }

    /// Badge fill color (RRGGBB) for formats that style status cells.
    pub fn fill_color(self) -> &'static str {
        match self {
            Status::Approved => "22C55E",
            Status::NotNeeded => "64748B",
            Status::Pending => "F59E0B",
        }
    }
}

/// One `{label, icon}` entry of a card-grid slide.
#[derive(Debug, Clone, Copy)]
pub struct ListEntry {
    pub label: &'static str,
    pub icon: &'static str,
}

/// One row of a clinic status table. Empty validity strings are legitimate
/// data and must survive into exports as blank cells.
#[derive(Debug, Clone, Copy)]
pub struct ClinicRow {
    pub clinic: &'static str,
    pub kind: &'static str,
    pub lta: &'static str,
    pub permit: &'static str,
    pub validity: &'static str,
}

impl ClinicRow {
    pub fn lta_status(&self) -> Status {
        Status::from_label(self.lta)
    }

    pub fn permit_status(&self) -> Status {
        Status::from_label(self.permit)
    }
}

/// One narrative card of the problems overview slide.
#[derive(Debug, Clone, Copy)]
pub struct ClinicNote {
    pub clinic: &'static str,
    pub icon: &'static str,
    pub status: &'static str,
    pub description: &'static str,
}

/// Variant payload of a slide.
#[derive(Debug, Clone, Copy)]
pub enum SlideBody {
    Cover { subtitle: &'static str },
    List { entries: &'static [ListEntry] },
    Table { caption: &'static str, rows: &'static [ClinicRow] },
    Notes { entries: &'static [ClinicNote] },
    Paragraphs { text: &'static [&'static str] },
}

/// One slide of the deck. Constructed once from static literals and never
/// mutated; the ordinal is the position in [`deck()`].
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub title: &'static str,
    pub body: SlideBody,
}

/// Column headers shared by both status tables.
pub const TABLE_HEADERS: [&str; 5] = [
    "Clínicas",
    "TIPO I OU II",
    "Aprovação LTA",
    "Alvará Sanitário",
    "Validade",
];

static SERVICES: [ListEntry; 21] = [
    ListEntry { label: "Abertura", icon: "📋" },
    ListEntry { label: "Alteração", icon: "✏️" },
    ListEntry { label: "Encerramento", icon: "🚪" },
    ListEntry { label: "Solicitação de Inscrição Municipal", icon: "🏛️" },
    ListEntry { label: "Alvará de Funcionamento", icon: "📜" },
    ListEntry { label: "Protocolo e Acompanhamento LTA", icon: "📋" },
    ListEntry { label: "COREN, CRM, CRF", icon: "👨‍⚕️" },
    ListEntry { label: "Inscrição Secundária CRM", icon: "🏥" },
    ListEntry { label: "Alvará dos Bombeiros", icon: "🚒" },
    ListEntry { label: "Alvará Sanitário", icon: "🧪" },
    ListEntry { label: "Certificados Digitais", icon: "💻" },
    ListEntry { label: "Verificação de Débitos", icon: "💰" },
    ListEntry { label: "Vivência em Órgãos Públicos", icon: "🏢" },
    ListEntry { label: "Atendimento a Fiscais", icon: "👮" },
    ListEntry { label: "LTCA, PGRSS, PGR, PCMSO", icon: "📊" },
    ListEntry { label: "Licença Ambiental", icon: "🌱" },
    ListEntry { label: "Processos Administrativos", icon: "📝" },
    ListEntry { label: "Controle de Vencimentos", icon: "📅" },
    ListEntry { label: "CETESB", icon: "🌿" },
    ListEntry { label: "CNES", icon: "🏥" },
    ListEntry { label: "Gestão de Contratos", icon: "📋" },
];

static LICENSED_CLINICS: [ClinicRow; 16] = [
    ClinicRow { clinic: "SP Indianópolis", kind: "Tipo II", lta: "Sim", permit: "Sim", validity: "03/05/2026" },
    ClinicRow { clinic: "RJ Barra da Tijuca", kind: "Tipo II", lta: "Sim", permit: "Sim", validity: "30/04/2026" },
    ClinicRow { clinic: "SP Alphaville 26ª", kind: "Tipo I", lta: "Não precisa", permit: "Sim", validity: "12/12/2025" },
    ClinicRow { clinic: "MG BH", kind: "Tipo II", lta: "Sim", permit: "Sim", validity: "17/07/2025 (Aguardando visita para renovação)" },
    ClinicRow { clinic: "BA Salvador", kind: "Tipo I", lta: "Sim", permit: "Sim", validity: "31/12/2025" },
    ClinicRow { clinic: "SC Balneário", kind: "Tipo II", lta: "Sim", permit: "Sim", validity: "31/12/2025" },
    ClinicRow { clinic: "DF Brasília I*", kind: "Tipo II", lta: "Sim", permit: "Sim", validity: "Aguardando clínica iniciar operações - 01/2026" },
    ClinicRow { clinic: "PE Recife", kind: "Tipo II", lta: "Protocolo", permit: "Sim", validity: "23/10/2026 (somente para Tipo I)" },
    ClinicRow { clinic: "ES Vitoria", kind: "Tipo II", lta: "Não precisa", permit: "Sim", validity: "28/02/2029" },
    ClinicRow { clinic: "GO Jardim America", kind: "Tipo II", lta: "Sim", permit: "Sim", validity: "31/12/2025" },
    ClinicRow { clinic: "SP Tatuapé", kind: "Tipo II", lta: "Não precisa", permit: "Sim", validity: "28/11/2027" },
    ClinicRow { clinic: "DF Brasília II", kind: "Tipo II", lta: "Sim", permit: "Sim", validity: "18/01/2026" },
    ClinicRow { clinic: "RJ Copacabana", kind: "Tipo II", lta: "Sim", permit: "Sim", validity: "30/4/2026" },
    ClinicRow { clinic: "MG Uberlandia", kind: "Tipo II", lta: "Protocolo", permit: "Sim", validity: "4/7/2028" },
    ClinicRow { clinic: "SP Jardins", kind: "Tipo I", lta: "Não precisa", permit: "Sim", validity: "11/10/2026" },
    ClinicRow { clinic: "DF Brasília III", kind: "Tipo II", lta: "Sim", permit: "Sim", validity: "30/04/2025 - Aguardando visita" },
];

static PENDING_CLINICS: [ClinicRow; 10] = [
    ClinicRow { clinic: "Cuiabá", kind: "Tipo II", lta: "Protocolo", permit: "Protocolo", validity: "Protocolo inicial em 05/2023 - refeito em 07/2024" },
    ClinicRow { clinic: "Manaus", kind: "Tipo II", lta: "Sim", permit: "Protocolo", validity: "Protocolo desde 04/2024" },
    ClinicRow { clinic: "Porto Velho", kind: "Tipo II", lta: "Não precisa", permit: "Protocolo", validity: "" },
    ClinicRow { clinic: "Porto Alegre", kind: "Tipo II", lta: "Protocolo", permit: "Protocolo", validity: "Protocolo desde 11.2023. Clínica aprovada pela fiscalização sanitária aguardando liberação do projeto." },
    ClinicRow { clinic: "Florianopolis", kind: "Tipo II", lta: "Protocolo", permit: "Protocolo", validity: "" },
    ClinicRow { clinic: "Ribeirão Preto", kind: "Tipo II", lta: "Sim", permit: "Protocolo", validity: "Protocolo desde 11/2024" },
    ClinicRow { clinic: "Campinas II", kind: "Tipo II", lta: "Não precisa", permit: "Protocolo", validity: "Renovação cancelada" },
    ClinicRow { clinic: "Mogi das Cruzes*", kind: "Tipo II", lta: "Não precisa", permit: "Protocolo", validity: "Protocolo desde 04/2024" },
    ClinicRow { clinic: "Aracaju*", kind: "Tipo II", lta: "Não precisa", permit: "Protocolo", validity: "Protocolo inicial em 01/2024 - Renovado em 06/2025" },
    ClinicRow { clinic: "Montes Claros", kind: "Tipo II", lta: "Não precisa", permit: "Protocolo", validity: "-" },
];

static DIFFICULTIES: [ListEntry; 6] = [
    ListEntry { label: "Inadequação da infraestrutura física à RDC 50", icon: "🏗️" },
    ListEntry { label: "Alto volume de denúncias e fiscalizações", icon: "📋" },
    ListEntry { label: "Escassez de profissionais com RQE para atuar como RT", icon: "👨‍⚕️" },
    ListEntry { label: "Vácuo legislativo para transplante capilar", icon: "⚖️" },
    ListEntry { label: "Inconsistência técnica nas fiscalizações", icon: "🔍" },
    ListEntry { label: "Pressões e interferências externas na operação", icon: "⚠️" },
];

static PROBLEM_NOTES: [ClinicNote; 5] = [
    ClinicNote {
        clinic: "Cuiabá",
        icon: "🏗️",
        status: "Fase final de liberação Tipo I",
        description: "A unidade passou por processo rigoroso de regularização junto à Vigilância Sanitária, motivado por denúncia que resultou em interdição temporária. Durante a fiscalização, foram exigidas diversas adequações, incluindo obras estruturais significativas. Todas as exigências foram devidamente atendidas, demonstrando o comprometimento da equipe com a conformidade e qualidade do serviço. Atualmente, a clínica encontra-se em fase final de liberação para operação como Tipo I, sendo que a classificação Tipo II ainda requer algumas intervenções adicionais.",
    },
    ClinicNote {
        clinic: "Manaus",
        icon: "🔧",
        status: "Projeto aprovado, obras em andamento",
        description: "Em Manaus, a unidade enfrentou desafios estruturais que demandaram múltiplas obras e ajustes para atender às normas da Vigilância Sanitária. Após um período de trabalho intenso, o projeto foi recentemente aprovado, embora algumas intervenções ainda estejam em andamento. O processo evidencia o empenho da equipe em garantir a total adequação da unidade, seguindo todas as exigências legais e estruturais para operação segura e eficiente.",
    },
    ClinicNote {
        clinic: "Porto Alegre",
        icon: "✅",
        status: "Validada pela Vigilância Sanitária",
        description: "A clínica de Porto Alegre já foi validada pela Vigilância Sanitária, o que confirma a conformidade da unidade com os requisitos essenciais de operação. No momento, aguarda-se apenas a conclusão da análise do projeto para que possa obter a liberação final, permitindo a continuidade das atividades dentro dos padrões exigidos.",
    },
    ClinicNote {
        clinic: "Florianópolis",
        icon: "📋",
        status: "Projeto aprovado, obra pendente",
        description: "Em Florianópolis, a unidade passou por um longo processo de aprovação do projeto, que envolveu diversas idas e vindas e ajustes estruturais. Apesar de o projeto ter sido aprovado, ainda é necessária a realização de uma obra de adequação para que a clínica esteja totalmente pronta para liberação. Esse processo demonstra o cuidado da equipe em garantir que a unidade atenda integralmente às normas de segurança e qualidade.",
    },
    ClinicNote {
        clinic: "Ribeirão Preto",
        icon: "🎯",
        status: "Fase final, pendência RT",
        description: "A unidade de Ribeirão Preto está em fase final de liberação. A clínica foi vistoriada e recebeu elogios da Vigilância Sanitária, com o projeto totalmente aprovado. No entanto, a liberação formal ainda depende da regularização de uma pendência do Responsável Técnico junto ao CRM. A expectativa é que, assim que essa questão seja solucionada, a clínica esteja plenamente operacional.",
    },
];

static EXPORT_MENU: [ListEntry; 4] = [
    ListEntry { label: "PowerPoint (.pptx)", icon: "📊" },
    ListEntry { label: "PDF", icon: "📄" },
    ListEntry { label: "HTML", icon: "🌐" },
    ListEntry { label: "Texto (.txt)", icon: "📝" },
];

static SLIDES: [Slide; 7] = [
    Slide {
        title: "Legalização e Infraestrutura",
        body: SlideBody::Cover { subtitle: "Setor de Infraestrutura e Legalização" },
    },
    Slide {
        title: "Serviços de Responsabilidade",
        body: SlideBody::List { entries: &SERVICES },
    },
    Slide {
        title: "Alvará Sanitário",
        body: SlideBody::Table { caption: "Status das Clínicas", rows: &LICENSED_CLINICS },
    },
    Slide {
        title: "Maiores Dificuldades",
        body: SlideBody::List { entries: &DIFFICULTIES },
    },
    Slide {
        title: "Unidades em Processo de Liberação",
        body: SlideBody::Table { caption: "Status das Unidades em Processo", rows: &PENDING_CLINICS },
    },
    Slide {
        title: "Overview de Problemas",
        body: SlideBody::Notes { entries: &PROBLEM_NOTES },
    },
    Slide {
        title: "Exportar Apresentação",
        body: SlideBody::List { entries: &EXPORT_MENU },
    },
];

/// The full deck, in canonical order. Exports walk this list front to back
/// with no reordering, filtering or sorting.
pub fn deck() -> &'static [Slide] {
    &SLIDES
}

/// Slide count, fixed at build time.
pub fn total_slides() -> usize {
    SLIDES.len()
}

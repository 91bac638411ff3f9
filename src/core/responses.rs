//! Canned responses and the keyword rules that select them.
//!
//! Rules are evaluated in declaration order against the lower-cased input and
//! the first rule with a keyword contained in the input wins. Overlapping
//! keywords are therefore resolved by position in [`RULES`], never by how
//! many keywords matched.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Greeting,
    CreatePatient,
    EditPatient,
    DeletePatient,
    SearchPatients,
    Scheduling,
    Problem,
    Support,
    Thanks,
    Fallback,
}

impl Topic {
    pub fn label(self) -> &'static str {
        match self {
            Topic::Greeting => "Saudação",
            Topic::CreatePatient => "Cadastrar paciente",
            Topic::EditPatient => "Editar paciente",
            Topic::DeletePatient => "Excluir paciente",
            Topic::SearchPatients => "Buscar pacientes",
            Topic::Scheduling => "Agenda de sessões",
            Topic::Problem => "Problemas e erros",
            Topic::Support => "Outras dúvidas",
            Topic::Thanks => "Agradecimento",
            Topic::Fallback => "Não entendi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CannedResponse {
    pub topic: Topic,
    /// Plain-text form, always present.
    pub text: &'static str,
    /// HTML form for responses that carry links.
    pub markup: Option<&'static str>,
}

#[derive(Debug)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub response: CannedResponse,
}

impl KeywordRule {
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }

    pub fn topic(&self) -> Topic {
        self.response.topic
    }
}

const SUPPORT_EMAIL: &str = "suporte@psicoassist.codertec.com.br";
const SUPPORT_PHONE: &str = "(41) 99613-1762";

pub const WELCOME_TEXT: &str =
    "Olá! Sou o assistente virtual do Psico Assist. Como posso ajudá-lo hoje?";

pub static RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["olá", "oi", "ola"],
        response: CannedResponse {
            topic: Topic::Greeting,
            text: "Olá! É um prazer ajudá-lo. Em que posso ser útil?",
            markup: None,
        },
    },
    KeywordRule {
        keywords: &["cadastrar", "novo", "criar"],
        response: CannedResponse {
            topic: Topic::CreatePatient,
            text: "Para cadastrar um novo paciente:\n\n\
                1. Clique em 'Cadastrar Paciente' no menu superior\n\
                2. Preencha os dados obrigatórios (nome, data de nascimento, telefone)\n\
                3. Adicione outras informações se desejar\n\
                4. Clique em 'Salvar' para finalizar",
            markup: None,
        },
    },
    KeywordRule {
        keywords: &["editar", "alterar", "modificar"],
        response: CannedResponse {
            topic: Topic::EditPatient,
            text: "Para editar um paciente:\n\n\
                1. Vá para a lista de pacientes\n\
                2. Clique no ícone de lápis (✏️) ao lado do paciente\n\
                3. Faça as alterações necessárias\n\
                4. Clique em 'Salvar' para atualizar",
            markup: None,
        },
    },
    KeywordRule {
        keywords: &["excluir", "remover", "deletar"],
        response: CannedResponse {
            topic: Topic::DeletePatient,
            text: "Para excluir um paciente:\n\n\
                1. Vá para a lista de pacientes\n\
                2. Clique no ícone de lixeira (🗑️) ao lado do paciente\n\
                3. Confirme a exclusão no modal\n\n\
                ⚠️ Atenção: Esta ação não pode ser desfeita!",
            markup: None,
        },
    },
    KeywordRule {
        keywords: &["buscar", "encontrar", "procurar"],
        response: CannedResponse {
            topic: Topic::SearchPatients,
            text: "Para buscar pacientes:\n\n\
                Use a barra de busca na parte superior da lista de pacientes. Você pode buscar por:\n\
                • Nome do paciente\n\
                • Telefone\n\
                • E-mail\n\
                • Qualquer informação do cadastro",
            markup: None,
        },
    },
    KeywordRule {
        keywords: &["agenda", "sessão", "consulta"],
        response: CannedResponse {
            topic: Topic::Scheduling,
            text: "Funcionalidade de agenda em breve!\n\n\
                Estamos desenvolvendo um sistema completo de agendamento de sessões. Em breve você poderá:\n\
                • Agendar consultas\n\
                • Gerenciar horários\n\
                • Receber lembretes\n\
                • E muito mais!\n\n\
                Fique atento às atualizações!",
            markup: None,
        },
    },
    KeywordRule {
        keywords: &["problema", "erro", "bug"],
        response: CannedResponse {
            topic: Topic::Problem,
            text: "Lamento ouvir que está com problemas. Entre em contato com nosso suporte:\n\n\
                📧 Email: suporte@psicoassist.codertec.com.br\n\
                📱 WhatsApp: (41) 99613-1762\n\n\
                Nossa equipe terá prazer em ajudá-lo!",
            markup: Some(
                "Lamento ouvir que está com problemas. Entre em contato com nosso suporte:<br><br>\
                📧 Email: <a href='mailto:suporte@psicoassist.codertec.com.br' style='color: var(--primary); text-decoration: none; border-bottom: 1px solid var(--primary);'>suporte@psicoassist.codertec.com.br</a><br>\
                📱 WhatsApp: <a href='https://wa.me/5541996131762' target='_blank' style='color: var(--primary); text-decoration: none; border-bottom: 1px solid var(--primary);'>(41) 99613-1762</a><br><br>\
                Nossa equipe terá prazer em ajudá-lo!",
            ),
        },
    },
    KeywordRule {
        keywords: &["outras dúvidas", "outras duvidas", "mais ajuda"],
        response: CannedResponse {
            topic: Topic::Support,
            text: "Claro! Para outras dúvidas ou suporte técnico, entre em contato conosco:\n\n\
                📧 Email: suporte@psicoassist.codertec.com.br\n\
                📱 WhatsApp: (41) 99613-1762\n\
                💻 Site: www.psicoassist.codertec.com.br\n\n\
                Horário de atendimento:\n\
                Segunda a Sexta: 8h às 18h\n\
                Sábado: 8h às 12h",
            markup: Some(
                "Claro! Para outras dúvidas ou suporte técnico, entre em contato conosco:<br><br>\
                📧 Email: <a href='mailto:suporte@psicoassist.codertec.com.br' style='color: var(--primary); text-decoration: none; border-bottom: 1px solid var(--primary);'>suporte@psicoassist.codertec.com.br</a><br>\
                📱 WhatsApp: <a href='https://wa.me/5541996131762' target='_blank' style='color: var(--primary); text-decoration: none; border-bottom: 1px solid var(--primary);'>(41) 99613-1762</a><br>\
                💻 Site: <a href='https://www.psicoassist.codertec.com.br' target='_blank' style='color: var(--primary); text-decoration: none; border-bottom: 1px solid var(--primary);'>www.psicoassist.codertec.com.br</a><br><br>\
                Horário de atendimento:<br>Segunda a Sexta: 8h às 18h<br>Sábado: 8h às 12h",
            ),
        },
    },
    KeywordRule {
        keywords: &["obrigado", "obrigada", "valeu"],
        response: CannedResponse {
            topic: Topic::Thanks,
            text: "De nada! Fico feliz em ajudar. 😊\n\n\
                Se tiver mais alguma dúvida, é só perguntar!",
            markup: None,
        },
    },
];

pub static FALLBACK: CannedResponse = CannedResponse {
    topic: Topic::Fallback,
    text: "Desculpe, não entendi completamente sua pergunta. 😅\n\n\
        Você pode:\n\
        • Reformular sua pergunta\n\
        • Usar uma das opções rápidas abaixo\n\
        • Entrar em contato com nosso suporte:\n  \
        📧 suporte@psicoassist.codertec.com.br\n  \
        📱 (41) 99613-1762",
    markup: None,
};

/// Pick the canned response for free-text input.
pub fn classify(input: &str) -> &'static CannedResponse {
    let lowered = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| &rule.response)
        .unwrap_or(&FALLBACK)
}

/// Contact line used by the CLI when printing topics.
pub fn support_contact() -> String {
    format!("{SUPPORT_EMAIL} • {SUPPORT_PHONE}")
}

use crate::core::app::App;
use crate::core::quick_action::QuickAction;
use crate::core::toast::{Toast, ToastKind};
use crate::ui::layout::{compute_regions, tail, transcript_lines, ModalRegions};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const TOAST_MIN_WIDTH: u16 = 30;

pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();
    let theme = &app.ui.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        area,
    );

    let regions = compute_regions(area, app.widget.is_open());
    render_host(f, app, regions.host);
    render_help_button(f, theme, regions.help_button);
    if let Some(modal) = regions.modal {
        render_modal(f, app, &modal);
    }
    render_toasts(f, theme, app.toasts.iter(), area);
}

fn render_host(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let title = format!(
        "🌿 Psico Assist v{} • Log: {}",
        env!("CARGO_PKG_VERSION"),
        app.transcript_status()
    );
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Bem-vindo ao painel do Psico Assist.",
            theme.host_text_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pressione ? ou F1 para abrir o assistente virtual.",
            theme.host_text_style,
        )),
        Line::from(Span::styled(
            "Esc fecha o assistente ou a última notificação • q ou Ctrl+C para sair",
            theme.host_text_style,
        )),
        Line::from(Span::styled(
            "Ctrl+L pausa ou retoma o log da conversa",
            theme.host_text_style,
        )),
    ];
    let host = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.input_border_style)
            .title(Span::styled(title, theme.title_style)),
    );
    f.render_widget(host, area);
}

fn render_help_button(f: &mut Frame, theme: &Theme, area: Rect) {
    let button = Paragraph::new(vec![Line::from(""), Line::from(" ? ")])
        .alignment(Alignment::Center)
        .style(theme.help_button_style);
    f.render_widget(Clear, area);
    f.render_widget(button, area);
}

fn render_modal(f: &mut Frame, app: &App, modal: &ModalRegions) {
    let theme = &app.ui.theme;
    f.render_widget(Clear, modal.outer);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.modal_border_style)
            .style(Style::default().bg(theme.background_color))
            .title(Span::styled(" 🤖 Assistente Psico ", theme.title_style))
            .title_bottom(
                Line::from(" Esc fecha • Ctrl+Y copia a última resposta ").right_aligned(),
            ),
        modal.outer,
    );

    let lines = transcript_lines(app.widget.messages(), theme, modal.messages.width);
    f.render_widget(
        Paragraph::new(tail(lines, modal.messages.height)),
        modal.messages,
    );

    if app.widget.is_typing() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "… Assistente está digitando...",
                theme.typing_indicator_style,
            )),
            modal.typing,
        );
    }

    for (slot, (action, cell)) in QuickAction::ALL
        .iter()
        .zip(modal.quick_actions.iter())
        .enumerate()
    {
        let label = format!("[Alt+{}] {}", slot + 1, action.label());
        f.render_widget(
            Paragraph::new(Span::styled(label, theme.quick_action_style)),
            *cell,
        );
    }

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.input_border_style)
        .title(Span::styled(
            " Mensagem (Enter envia) ",
            theme.input_title_style,
        ));
    let input_inner = input_block.inner(modal.input);
    f.render_widget(input_block, modal.input);
    f.render_widget(app.ui.textarea(), input_inner);
}

fn toast_style(theme: &Theme, kind: ToastKind) -> Style {
    match kind {
        ToastKind::Success => theme.toast_success_style,
        ToastKind::Info => theme.toast_info_style,
        ToastKind::Warning => theme.toast_warning_style,
        ToastKind::Error => theme.toast_error_style,
    }
}

fn render_toasts<'a>(
    f: &mut Frame,
    theme: &Theme,
    toasts: impl Iterator<Item = &'a Toast>,
    area: Rect,
) {
    let mut y = area.y.saturating_add(1);
    for toast in toasts {
        if y.saturating_add(3) > area.bottom() {
            break;
        }
        let text = format!("{} {}", toast.kind.icon(), toast.message);
        let wanted = (text.width() as u16).saturating_add(4);
        let width = wanted
            .max(TOAST_MIN_WIDTH)
            .min(area.width.saturating_sub(2));
        let rect = Rect::new(
            area.right().saturating_sub(width + 1),
            y,
            width,
            3,
        );
        let style = toast_style(theme, toast.kind);
        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(text)
                .style(style)
                .block(Block::default().borders(Borders::ALL).style(style)),
            rect,
        );
        y += 3;
    }
}

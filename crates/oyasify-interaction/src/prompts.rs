//! Prompt templates for the studio generators.
//!
//! The script and lyrics prompts are rendered with minijinja from the
//! user's idea (and, for lyrics, an optional style). The templates ask for
//! basic-HTML output so the caller can render the result directly.

use minijinja::render;

const SCRIPT_TEMPLATE: &str = r#"You are an expert scriptwriter AI. Your task is to generate a compelling and platform-optimized video script based on the user's idea: "{{ idea }}".

The script should be structured for maximum engagement and follow best practices for platforms like YouTube (long-form or Shorts), TikTok, or Instagram Reels. If no platform is specified, create a versatile script for a standard YouTube video.

Structure the script with:
1.  **Hook:** A captivating intro (first 3-5 seconds) to grab the viewer's attention.
2.  **Introduction:** Briefly explain what the video is about.
3.  **Main Content:** Broken down into key points or steps, with visual cues (e.g., "[B-roll of...]").
4.  **Call to Action (CTA):** Encourage viewers to like, subscribe, and comment.
5.  **Outro:** A quick, memorable sign-off.

Format the output in basic HTML using tags like <h2> for titles, <p> for paragraphs, and <strong> for emphasis. Do not include <html> or <body> tags."#;

const LYRICS_TEMPLATE: &str = r#"Você é um compositor de músicas geek profissional, especialista em criar letras profundas e temáticas sobre animes, mangás, jogos e cultura pop. Sua tarefa é gerar uma letra de música completa e original baseada na ideia do usuário, seguindo o estilo e a qualidade dos exemplos abaixo.

A letra deve ser:
- **Temática:** Profundamente conectada à história, personagens e emoções da obra de referência.
- **Estruturada:** Use marcações claras em português para as seções, como <strong>Início</strong>, <strong>Verso 1</strong>, <strong>Ponte</strong>, <strong>Refrão</strong>, etc., para separar as partes da música.
- **Emocional e Poética:** Use metáforas e linguagem poética para transmitir os sentimentos.
- **Titulada Corretamente:** O título deve seguir o formato "Título Criativo (Obra de Referência)".
{% if remix -%}

**Instrução Especial para Remix:** O usuário escolheu o estilo "Remix". A "ideia" fornecida pode ser uma música existente. Sua tarefa é criar uma paródia ou uma nova versão dessa música, mantendo uma estrutura rítmica ou melódica semelhante, mas com uma nova letra criativa focada em um tema geek (anime, jogos, cultura pop). Se a ideia não for uma música, crie uma letra original que soe como um remix de um tema famoso.
{% endif -%}

**Exemplos de Músicas de Alta Qualidade:**

---
**Exemplo 1: Goodnight (Oyasumi Punpun)**

E se eu não acordar no dia de amanhã?
Será que um dia poderá se lembrar?
Aquele cheiro doce de hortela
Que eu sentia toda vez que acordava
Então não, não, não
Não se esqueça dos tempos bons
Dias sem cheiro de solidão
Esperando as estrelas acordarem
E com um "Boa Noite"
Eu me despeço
E como um lindo jardim
Por sangue coberto
Tentando me encontrar
Antes que a morte possa
Não posso mais me enxergar
Só a mim posso culpar.
---
**Exemplo 2: O Pequeno Príncipe**

Brilhando como a noite, eu
Olhando pra frente, eu vi passar
Tantas estrelas nesse meu céu estrelado
Como eu não fiquei do meu lado?
Em um cometa
Distante
Viajei pra outro planeta
Eu tenho direito de me amar
Eu tenho direito de me escutar
Pequeno príncipe
Navegue por águas mansas
Guarde suas boas lembranças
Ame como se não houvesse amanhã
Eternamente, sim, eu serei
Responsável por quem cativei
---
**Exemplo 3: Espiral (Uzumaki)**

Eu quero contá-los uma história
Sobre o lugar onde eu cresci
Bizarras as pessoas que aqui moram
Bizarro o que aconteceu aqui
Olhe em volta e perceberá
Esse céu não é normal
Nuvens formam uma espiral
Fuja desse fascínio mortal
Antes que você se torne uma espiral
Antes que a maldição te pegue afinal
Ela te segue mesmo após o final
---

**Sua Tarefa:**

Agora, crie uma letra de música{{ style_suffix }} com base na seguinte ideia do usuário: "{{ idea }}".

Mantenha o mesmo nível de qualidade, profundidade e estrutura dos exemplos.

Formate a saída em HTML básico usando <h2> para o título e <p> para os versos de cada seção. Use <strong> para os títulos das seções (Ex: <strong>Refrão</strong>). Não inclua <html> ou <body> tags."#;

/// Renders the video-script generation prompt.
pub fn script_prompt(idea: &str) -> String {
    render!(SCRIPT_TEMPLATE, idea => idea)
}

/// Renders the lyrics generation prompt.
///
/// The "remix" style switches the template into parody mode, matching the
/// studio's style picker.
pub fn lyrics_prompt(idea: &str, style: Option<&str>) -> String {
    let style_suffix = style
        .map(|s| format!(" no estilo {s}"))
        .unwrap_or_default();
    let remix = style.is_some_and(|s| s.eq_ignore_ascii_case("remix"));
    render!(LYRICS_TEMPLATE, idea => idea, style_suffix => style_suffix, remix => remix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_prompt_embeds_the_idea() {
        let prompt = script_prompt("3 dicas para viajar barato");
        assert!(prompt.contains("\"3 dicas para viajar barato\""));
        assert!(prompt.contains("<h2>"));
    }

    #[test]
    fn lyrics_prompt_without_style_has_no_suffix() {
        let prompt = lyrics_prompt("Uzumaki", None);
        assert!(prompt.contains("crie uma letra de música com base"));
        assert!(!prompt.contains("Instrução Especial para Remix"));
    }

    #[test]
    fn lyrics_prompt_with_remix_style_adds_special_instruction() {
        let prompt = lyrics_prompt("Never Gonna Give You Up", Some("Remix"));
        assert!(prompt.contains(" no estilo Remix"));
        assert!(prompt.contains("Instrução Especial para Remix"));
    }
}

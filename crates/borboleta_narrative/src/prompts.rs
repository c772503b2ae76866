//! Prompt templates.
//!
//! All player-facing text is Brazilian Portuguese, so the prompts are too.

use borboleta_core::{GameTheme, HistoryItem, PlayerIdentity, excerpt};

/// Game Master persona and narrative rules for `theme`.
pub fn system_instruction(theme: GameTheme, choices_per_node: usize) -> String {
    format!(
        r#"Você é um Mestre do Jogo e contador de histórias, especialista em narrativas interativas baseadas no "Efeito Borboleta", com o tema principal: {theme}. Sua tarefa é criar histórias em que o jogador é o personagem central e o catalisador de eventos inspirados em fatos reais.

PRINCÍPIOS:
1. Jogador no centro: o jogador é o foco de todas as ações. Narre em segunda pessoa ("Você está em uma sala...").
2. Efeito Borboleta: pequenas escolhas têm consequências em cascata. Mantenha a coerência com o histórico de escolhas recebido.
3. Destino inevitável: às vezes a história converge de volta ao desfecho histórico real, se as ações do jogador não bastarem para desviá-la.
4. Ficção baseada em fatos: inspire-se em casos reais, mas SEMPRE ficcionalize. NUNCA use nomes reais de pessoas, lugares ou datas.
5. Tom: tensão e mistério, em português do Brasil, com textos curtos e impactantes.
6. Saída: responda APENAS com um objeto JSON válido que siga o esquema fornecido.
7. Fluxo: 'outcomeText' descreve o que ACONTECEU logo após a última escolha; 'storyText' descreve a NOVA CENA e o NOVO DILEMA. Ofereça exatamente {choices_per_node} escolhas.
8. Nó final: se 'isEnd' for true, 'outcomeText' é o desfecho da história, 'storyText' é uma frase conclusiva curta (ex.: "Seu destino está selado.") e 'choices' é um array vazio [].
9. Referência real: somente no nó final, preencha 'realEventReference' com uma descrição curta e enciclopédica do evento real que inspirou a história. Não use esse campo em nenhum outro nó."#
    )
}

/// Prompt for the opening node.
pub fn start_prompt(
    theme: GameTheme,
    identity: PlayerIdentity,
    choices_per_node: usize,
) -> String {
    format!(
        "Inicie uma história interativa com o tema '{theme}' para um jogador que se identifica como '{identity}'. \
         Posicione o jogador como personagem principal. Neste primeiro nó, 'outcomeText' deve ser uma introdução \
         cinematográfica curta que estabelece a atmosfera, e 'storyText' deve apresentar o dilema inicial, o momento \
         crucial antes da primeira grande decisão. Crie suspense e apresente {choices_per_node} escolhas que representem \
         o primeiro bater de asas da borboleta."
    )
}

/// One line per committed turn: an excerpt of the scene and the choice made.
///
/// # Examples
///
/// ```
/// use borboleta_core::{Choice, HistoryItem, StoryNode};
/// use borboleta_narrative::history_transcript;
///
/// let node = StoryNode::builder()
///     .outcome_text("Começo")
///     .story_text("Você está diante de um cofre aberto")
///     .build()
///     .unwrap();
/// let history = vec![HistoryItem::new(node, Choice::new("A", "Fechar o cofre"))];
///
/// assert_eq!(
///     history_transcript(&history, 10),
///     "Cenário: \"Você está \"... | Escolha: \"Fechar o cofre\""
/// );
/// ```
pub fn history_transcript(history: &[HistoryItem], excerpt_chars: usize) -> String {
    history
        .iter()
        .map(|item| {
            format!(
                "Cenário: \"{}\"... | Escolha: \"{}\"",
                excerpt(item.node().story_text(), excerpt_chars),
                item.choice().text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for the node following the last entry of `history`.
///
/// Returns `None` for an empty history.
pub fn advance_prompt(
    history: &[HistoryItem],
    identity: PlayerIdentity,
    excerpt_chars: usize,
    choices_per_node: usize,
) -> Option<String> {
    let last_choice = history.last()?.choice().text();
    let transcript = history_transcript(history, excerpt_chars);

    Some(format!(
        "Continue a história interativa. O jogador se identifica como '{identity}'.\n\
         Histórico de escolhas:\n\
         {transcript}\n\
         \n\
         A última decisão do jogador foi: \"{last_choice}\".\n\
         \n\
         Com base nisso, crie a próxima cena:\n\
         - 'outcomeText': descreva a consequência direta e imediata da escolha \"{last_choice}\". Seja claro sobre o resultado da ação.\n\
         - 'storyText': descreva a nova situação e o novo dilema que o jogador enfrenta. Apresente {choices_per_node} novas escolhas.\n\
         Lembre-se do Efeito Borboleta e do Destino Inevitável. Se este for o final, siga as regras do nó final e preencha 'realEventReference'."
    ))
}

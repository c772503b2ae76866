//! Response schema sent with every story request.

use serde_json::{Value, json};

/// JSON schema of a story node in Gemini's OpenAPI subset.
///
/// `realEventReference` is the only optional property.
///
/// # Examples
///
/// ```
/// use borboleta_narrative::story_node_schema;
///
/// let schema = story_node_schema(3);
/// assert_eq!(schema["type"], "OBJECT");
/// assert_eq!(schema["required"].as_array().unwrap().len(), 6);
/// ```
pub fn story_node_schema(choices_per_node: usize) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "outcomeText": {
                "type": "STRING",
                "description": "O que aconteceu como resultado direto da última escolha do jogador. Uma descrição concisa da consequência imediata."
            },
            "storyText": {
                "type": "STRING",
                "description": "A NOVA CENA e o NOVO DILEMA. Curto, direto, impactante, em português do Brasil (no máximo 4-5 frases)."
            },
            "choices": {
                "type": "ARRAY",
                "description": format!(
                    "Exatamente {choices_per_node} opções claras e distintas, ou um array vazio se isEnd for true."
                ),
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {
                            "type": "STRING",
                            "description": "Identificador único da escolha, ex.: 'A', 'B', 'C'."
                        },
                        "text": {
                            "type": "STRING",
                            "description": "Texto da escolha como será mostrado ao jogador."
                        }
                    },
                    "required": ["id", "text"]
                }
            },
            "imagePrompt": {
                "type": "STRING",
                "description": "Descrição detalhada de uma imagem de fundo para a atmosfera da cena. Ex.: 'sala de interrogatório escura, mesa de metal, estilo noir'."
            },
            "soundDescription": {
                "type": "STRING",
                "description": "Breve descrição do som ambiente da cena. Ex.: 'silêncio tenso, zumbido de lâmpada fluorescente'."
            },
            "isEnd": {
                "type": "BOOLEAN",
                "description": "Verdadeiro se esta cena for o final da história."
            },
            "realEventReference": {
                "type": "STRING",
                "description": "Somente se isEnd for true: breve descrição do evento real que inspirou a história. Omitir nos demais nós."
            }
        },
        "required": ["outcomeText", "storyText", "choices", "imagePrompt", "soundDescription", "isEnd"]
    })
}

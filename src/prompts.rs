//! Prompt templates for the three LLM use cases.
//!
//! Pure formatting over validated request structs: identical parameters
//! always yield identical strings, with millimetric figures rendered at two
//! decimal places regardless of the process locale.

use crate::schema::{CuttingRequest, PricingRequest};

/// Prompt for the prospect search: asks for exactly three candidates in the
/// strict tuple format [`crate::parser::parse_prospects`] expects.
pub fn prospect_search_prompt(region: &str) -> String {
    format!(
        "Atue como um assistente de vendas sênior para uma distribuidora de aço. \
         Sua tarefa é encontrar 3 potenciais clientes reais na região de {region}. \
         Foque em construtoras, metalúrgicas ou engenharias de estruturas. \
         Para cada cliente, forneça: NOME, DESCRIÇÃO, LATITUDE e LONGITUDE. \
         Retorne os dados estritamente no formato: - (NOME; DESCRIÇÃO; LATITUDE; LONGITUDE). \
         Exemplo: - (Gerdau Aços Longos; Produz aço para construção civil; -23.55; -46.63)"
    )
}

/// Prompt for the market-price analysis. The reply is displayed as-is; no
/// structured extraction is applied to it.
pub fn pricing_prompt(request: &PricingRequest) -> String {
    format!(
        "Atue como um analista de preços sênior do setor siderúrgico. \
         Sua tarefa é fornecer uma estimativa de preço para o seguinte item: \
         - Produto: {product} \
         - Espessura: {thickness:.2} mm \
         - Região de Venda: {region}. \
         O relatório deve conter: \
         1. **Preço Estimado por KG:** Uma faixa de preço realista em Reais por quilograma (R$/kg). \
         2. **Principais Fatores de Influência:** Liste 3 a 4 fatores que impactam esse preço. \
         3. **Comentário de Mercado:** Um parágrafo curto com sua análise sobre a tendência. \
         Formate a resposta de forma clara e profissional usando Markdown.",
        product = request.product,
        thickness = request.thickness_mm,
        region = request.region,
    )
}

/// Prompt for the cutting-service quote. The closing instruction pins the
/// final line [`crate::parser::parse_unit_price`] looks for.
pub fn cutting_prompt(request: &CuttingRequest) -> String {
    format!(
        "Atue como um orçamentista de serviços de corte. \
         Calcule o preço para UMA ÚNICA PEÇA com as seguintes especificações: \
         - Material: {material} \
         - Espessura: {thickness:.2} mm \
         - Comprimento de Corte: {length} mm \
         - Furos: {pierces}. \
         Forneça uma análise de custos e, o mais importante, termine sua resposta com a linha \
         'PREÇO UNITÁRIO ESTIMADO: R$ XX.XX', substituindo XX.XX pelo valor numérico final.",
        material = request.material.label(),
        thickness = request.thickness_mm,
        length = request.cut_length_mm,
        pierces = request.pierce_count,
    )
}

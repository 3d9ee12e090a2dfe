/// Converts a WMO weather code to its Portuguese condition label.
///
/// Total over all integers: codes outside the table map to "Desconhecido".
pub fn classify(code: i32) -> &'static str {
    match code {
        0 => "Céu limpo",
        1 => "Principalmente claro",
        2 => "Parcialmente nublado",
        3 => "Nublado",
        45 => "Nebuloso",
        48 => "Neblina depositante",
        51 => "Chuvisco leve",
        53 => "Chuvisco moderado",
        55 => "Chuvisco denso",
        61 | 80 => "Chuvas leves",
        63 | 81 => "Chuvas moderadas",
        65 => "Chuvas fortes",
        71 | 85 => "Neve leve",
        73 => "Neve moderada",
        75 | 86 => "Neve forte",
        77 => "Grãos de neve",
        82 => "Chuvas torrenciais",
        95 => "Tempestade",
        96 => "Tempestade com granizo leve",
        99 => "Tempestade com granizo forte",
        _ => "Desconhecido",
    }
}

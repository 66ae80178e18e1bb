use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Team info from the `times` table
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub nome: String,
    pub sigla: String,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub escudo_url: Option<String>,
    pub data_criacao: Option<String>,
}

/// Minimal team projection for the team list
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: i64,
    pub nome: String,
    pub sigla: String,
    pub escudo_url: Option<String>,
}

/// An athlete's latest roster assignment joined to the team
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct AthleteTeam {
    pub id: i64,
    pub nome: String,
    pub sigla: String,
    pub temporada: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub nome: Option<String>,
    pub sigla: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    #[serde(alias = "timeEscudo")]
    pub escudo_url: Option<String>,
    pub data_criacao: Option<String>,
}

/// A [`NewTeam`] that passed validation, ready to bind.
#[derive(Debug)]
pub struct TeamInsert {
    pub nome: String,
    pub sigla: String,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub escudo_url: Option<String>,
    pub data_criacao: Option<String>,
}

impl NewTeam {
    pub fn validate(self) -> Result<TeamInsert, ApiError> {
        Ok(TeamInsert {
            nome: required_text(self.nome)?,
            sigla: required_text(self.sigla)?,
            cidade: optional_text(self.cidade),
            estado: optional_text(self.estado),
            escudo_url: optional_text(self.escudo_url),
            data_criacao: optional_text(self.data_criacao),
        })
    }
}

/// Athlete row as selected for roster listings
#[derive(Debug, sqlx::FromRow)]
pub struct AthleteRow {
    pub registro: i64,
    pub nome: String,
    pub nome_camisa: String,
    pub numero_camisa: i64,
    pub posicao: i64,
    pub altura: Option<f64>,
    pub peso: Option<f64>,
    pub idade: Option<i64>,
    pub data_nascimento: Option<String>,
}

/// Roster projection returned by the athlete list endpoints
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub registro_atleta: i64,
    pub nome: String,
    pub nome_camisa: String,
    pub numero_camisa: i64,
    pub posicao: i64,
    pub altura: Option<f64>,
    pub peso: Option<f64>,
    pub idade: Option<i64>,
}

impl AthleteRow {
    pub fn to_athlete(&self, today: NaiveDate) -> Athlete {
        Athlete {
            registro_atleta: self.registro,
            nome: self.nome.clone(),
            nome_camisa: self.nome_camisa.clone(),
            numero_camisa: self.numero_camisa,
            posicao: self.posicao,
            altura: self.altura,
            peso: self.peso,
            idade: current_age(self.data_nascimento.as_deref(), self.idade, today),
        }
    }
}

/// Athlete row with biographical and physical-testing columns
#[derive(Debug, sqlx::FromRow)]
pub struct AthleteDetailRow {
    #[sqlx(flatten)]
    pub base: AthleteRow,
    pub pais_origem: Option<String>,
    pub estado_origem: Option<String>,
    pub cidade_origem: Option<String>,
    pub salto_vertical: Option<f64>,
    pub envergadura: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteDetail {
    #[serde(flatten)]
    pub athlete: Athlete,
    pub pais_origem: Option<String>,
    pub estado_origem: Option<String>,
    pub cidade_origem: Option<String>,
    pub salto_vertical: Option<f64>,
    pub envergadura: Option<f64>,
    pub data_nascimento: Option<String>,
}

impl AthleteDetailRow {
    pub fn to_athlete_detail(&self, today: NaiveDate) -> AthleteDetail {
        AthleteDetail {
            athlete: self.base.to_athlete(today),
            pais_origem: self.pais_origem.clone(),
            estado_origem: self.estado_origem.clone(),
            cidade_origem: self.cidade_origem.clone(),
            salto_vertical: self.salto_vertical,
            envergadura: self.envergadura,
            data_nascimento: self.base.data_nascimento.clone(),
        }
    }
}

/// Request body for registering an athlete.
///
/// Required fields follow truthiness rules: a `numeroCamisa` or `posicao` of
/// `0` counts as missing, same as an empty name.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAthlete {
    pub registro: Option<i64>,
    pub nome: Option<String>,
    pub nome_camisa: Option<String>,
    pub numero_camisa: Option<i64>,
    pub posicao: Option<i64>,
    pub altura: Option<f64>,
    pub peso: Option<f64>,
    pub idade: Option<i64>,
    pub pais_origem: Option<String>,
    pub estado_origem: Option<String>,
    pub cidade_origem: Option<String>,
    pub salto_vertical: Option<f64>,
    pub envergadura: Option<f64>,
    pub data_nascimento: Option<String>,
}

/// A [`NewAthlete`] that passed validation, ready to bind.
#[derive(Debug)]
pub struct AthleteInsert {
    pub registro: i64,
    pub nome: String,
    pub nome_camisa: String,
    pub numero_camisa: i64,
    pub posicao: i64,
    pub altura: Option<f64>,
    pub peso: Option<f64>,
    pub idade: Option<i64>,
    pub pais_origem: Option<String>,
    pub estado_origem: Option<String>,
    pub cidade_origem: Option<String>,
    pub salto_vertical: Option<f64>,
    pub envergadura: Option<f64>,
    pub data_nascimento: Option<String>,
}

impl NewAthlete {
    pub fn validate(self) -> Result<AthleteInsert, ApiError> {
        Ok(AthleteInsert {
            registro: required_number(self.registro)?,
            nome: required_text(self.nome)?,
            nome_camisa: required_text(self.nome_camisa)?,
            numero_camisa: required_number(self.numero_camisa)?,
            posicao: required_number(self.posicao)?,
            altura: optional_float(self.altura),
            peso: optional_float(self.peso),
            idade: self.idade.filter(|v| *v != 0),
            pais_origem: optional_text(self.pais_origem),
            estado_origem: optional_text(self.estado_origem),
            cidade_origem: optional_text(self.cidade_origem),
            salto_vertical: optional_float(self.salto_vertical),
            envergadura: optional_float(self.envergadura),
            data_nascimento: optional_text(self.data_nascimento),
        })
    }
}

/// One athlete's box score for one game
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct GameStatLine {
    #[serde(rename = "jogos_idJogo")]
    #[sqlx(rename = "jogos_idJogo")]
    pub jogo_id: i64,
    pub minutos_jogador: i64,
    pub pontos: i64,
    pub assistencias: i64,
    pub rebotes: i64,
    pub bloqueios: i64,
    pub roubos: i64,
    pub turnovers: i64,
    pub faltas_cometidas: i64,
    pub arremessos_convertidos: i64,
    pub arremessos_tentados: i64,
    pub lances_livres_convertidos: i64,
    pub lances_livres_tentados: i64,
    pub bolas_tres_convertidas: i64,
    pub bolas_tres_tentadas: i64,
}

/// Request body for recording a box score.
///
/// Only the game, minutes and points are checked up front; the remaining
/// counters go to the datastore as given.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameStatLine {
    #[serde(rename = "jogos_idJogo")]
    pub jogo_id: Option<i64>,
    pub minutos_jogador: Option<i64>,
    pub pontos: Option<i64>,
    pub assistencias: Option<i64>,
    pub rebotes: Option<i64>,
    pub bloqueios: Option<i64>,
    pub roubos: Option<i64>,
    pub turnovers: Option<i64>,
    pub faltas_cometidas: Option<i64>,
    pub arremessos_convertidos: Option<i64>,
    pub arremessos_tentados: Option<i64>,
    pub lances_livres_convertidos: Option<i64>,
    pub lances_livres_tentados: Option<i64>,
    pub bolas_tres_convertidas: Option<i64>,
    pub bolas_tres_tentadas: Option<i64>,
}

impl NewGameStatLine {
    pub fn validate(self) -> Result<NewGameStatLine, ApiError> {
        // zero minutes or points is a real stat line, a zero game id is not
        required_number(self.jogo_id)?;
        if self.minutos_jogador.is_none() || self.pontos.is_none() {
            return Err(ApiError::MissingFields);
        }
        Ok(self)
    }
}

/// Championship edition
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Championship {
    pub edicao: i64,
    pub nome: String,
    pub local_jogo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id_jogo: i64,
    pub data_jogo: Option<String>,
    pub quadra: Option<String>,
    pub time_casa: i64,
    pub time_fora: i64,
    pub pontos_casa: Option<i64>,
    pub pontos_fora: Option<i64>,
}

/// Single game with both teams' names resolved
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub game: Game,
    pub nome_time_casa: Option<String>,
    pub nome_time_fora: Option<String>,
}

/// Rounded per-game averages; every field is 0 when no games are recorded
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, PartialEq)]
pub struct PerformanceAverages {
    pub pontos: f64,
    pub rebotes: f64,
    pub assistencias: f64,
    pub eficiencia: f64,
}

/// Row from the personal-record union query
#[derive(Debug, sqlx::FromRow)]
pub struct RecordRow {
    pub categoria: String,
    pub valor: i64,
    pub data_jogo: Option<String>,
    pub adversario: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub valor: i64,
    pub data_jogo: Option<String>,
    pub adversario: Option<String>,
}

/// Single-game maxima; a category without any stat line is left out
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Records {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pontos: Option<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebotes: Option<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistencias: Option<Record>,
}

impl Records {
    pub fn from_rows(rows: Vec<RecordRow>) -> Self {
        let mut records = Records::default();
        for row in rows {
            let slot = match row.categoria.as_str() {
                "pontos" => &mut records.pontos,
                "rebotes" => &mut records.rebotes,
                "assistencias" => &mut records.assistencias,
                other => {
                    tracing::warn!("ignoring unknown record category {}", other);
                    continue;
                }
            };
            *slot = Some(Record {
                valor: row.valor,
                data_jogo: row.data_jogo,
                adversario: row.adversario,
            });
        }
        records
    }
}

/// Response for the performance summary
#[derive(Debug, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub medias: PerformanceAverages,
    pub recordes: Records,
}

fn required_text(value: Option<String>) -> Result<String, ApiError> {
    value.filter(|s| !s.is_empty()).ok_or(ApiError::MissingFields)
}

fn required_number(value: Option<i64>) -> Result<i64, ApiError> {
    value.filter(|v| *v != 0).ok_or(ApiError::MissingFields)
}

fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn optional_float(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Whole years since `birth` at `today`, falling back to the stored age
/// when the birth date is absent or unparseable.
pub fn current_age(birth: Option<&str>, stored: Option<i64>, today: NaiveDate) -> Option<i64> {
    let Some(birth) = birth.and_then(|b| NaiveDate::parse_from_str(b, "%Y-%m-%d").ok()) else {
        return stored;
    };

    let mut age = (today.year() - birth.year()) as i64;
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age.max(0))
}

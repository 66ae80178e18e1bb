use sqlx::sqlite::SqlitePool;
use crate::models::*;

// Team queries
pub async fn get_all_teams(pool: &SqlitePool) -> Result<Vec<TeamSummary>, sqlx::Error> {
    sqlx::query_as::<_, TeamSummary>(
        r#"SELECT id, nome, sigla, timeEscudo AS escudo_url
           FROM times
           ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_team_by_id(pool: &SqlitePool, team_id: i64) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT
               id,
               nome,
               sigla,
               cidade,
               estado,
               timeEscudo AS escudo_url,
               dataCriacao AS data_criacao
           FROM times
           WHERE id = ?"#
    )
    .bind(team_id)
    .fetch_optional(pool)
    .await
}

pub async fn team_exists(pool: &SqlitePool, team_id: i64) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar(r#"SELECT id FROM times WHERE id = ?"#)
        .bind(team_id)
        .fetch_optional(pool)
        .await?;

    Ok(found.is_some())
}

pub async fn insert_team(pool: &SqlitePool, team: &TeamInsert) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO times (nome, sigla, cidade, estado, timeEscudo, dataCriacao)
           VALUES (?, ?, ?, ?, ?, ?)"#
    )
    .bind(&team.nome)
    .bind(&team.sigla)
    .bind(&team.cidade)
    .bind(&team.estado)
    .bind(&team.escudo_url)
    .bind(&team.data_criacao)
    .execute(pool)
    .await?;

    Ok(())
}

/// Deletes a team and every row that references it, in one transaction.
///
/// Returns `false` (and changes nothing) when the team does not exist.
pub async fn delete_team(pool: &SqlitePool, team_id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let found: Option<i64> = sqlx::query_scalar(r#"SELECT id FROM times WHERE id = ?"#)
        .bind(team_id)
        .fetch_optional(&mut *tx)
        .await?;

    if found.is_none() {
        return Ok(false);
    }

    sqlx::query(r#"DELETE FROM atletasDoTime WHERE times_id = ?"#)
        .bind(team_id)
        .execute(&mut *tx)
        .await?;

    // the opponent's rows for the team's games go too, since those games are removed below
    sqlx::query(
        r#"DELETE FROM equipesEstatisticasJogos
           WHERE times_id = ?
              OR jogos_idJogo IN (SELECT idJogo FROM jogos WHERE timeCasa = ? OR timeFora = ?)"#
    )
    .bind(team_id)
    .bind(team_id)
    .bind(team_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"DELETE FROM resultadoJogo
           WHERE times_id = ?
              OR jogos_idJogo IN (SELECT idJogo FROM jogos WHERE timeCasa = ? OR timeFora = ?)"#
    )
    .bind(team_id)
    .bind(team_id)
    .bind(team_id)
    .execute(&mut *tx)
    .await?;

    // box scores and championship links must not outlive the games either
    sqlx::query(
        r#"DELETE FROM atletasEstatisticasJogos
           WHERE jogos_idJogo IN (SELECT idJogo FROM jogos WHERE timeCasa = ? OR timeFora = ?)"#
    )
    .bind(team_id)
    .bind(team_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"DELETE FROM jogosDoCampeonato
           WHERE jogos_idJogo IN (SELECT idJogo FROM jogos WHERE timeCasa = ? OR timeFora = ?)"#
    )
    .bind(team_id)
    .bind(team_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(r#"DELETE FROM jogos WHERE timeCasa = ? OR timeFora = ?"#)
        .bind(team_id)
        .bind(team_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query(r#"DELETE FROM timesDoCampeonato WHERE times_id = ?"#)
        .bind(team_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query(r#"DELETE FROM times WHERE id = ?"#)
        .bind(team_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(true)
}

// Athlete queries
pub async fn get_all_athletes(pool: &SqlitePool) -> Result<Vec<AthleteRow>, sqlx::Error> {
    sqlx::query_as::<_, AthleteRow>(
        r#"SELECT
               registro,
               nome,
               nomeCamisa AS nome_camisa,
               numeroCamisa AS numero_camisa,
               posicao,
               altura,
               peso,
               idade,
               dataNascimento AS data_nascimento
           FROM atletas
           ORDER BY registro"#
    )
    .fetch_all(pool)
    .await
}

/// Athletes ever assigned to a team, newest season first.
///
/// One row per roster assignment: an athlete kept across several seasons
/// shows up once per season.
pub async fn get_team_athletes(pool: &SqlitePool, team_id: i64) -> Result<Vec<AthleteRow>, sqlx::Error> {
    sqlx::query_as::<_, AthleteRow>(
        r#"SELECT
               a.registro,
               a.nome,
               a.nomeCamisa AS nome_camisa,
               a.numeroCamisa AS numero_camisa,
               a.posicao,
               a.altura,
               a.peso,
               a.idade,
               a.dataNascimento AS data_nascimento
           FROM atletas a
           JOIN atletasDoTime adt ON a.registro = adt.atletas_registro
           WHERE adt.times_id = ?
           ORDER BY adt.temporada DESC"#
    )
    .bind(team_id)
    .fetch_all(pool)
    .await
}

pub async fn get_athlete_by_registro(pool: &SqlitePool, registro: i64) -> Result<Option<AthleteDetailRow>, sqlx::Error> {
    sqlx::query_as::<_, AthleteDetailRow>(
        r#"SELECT
               registro,
               nome,
               nomeCamisa AS nome_camisa,
               numeroCamisa AS numero_camisa,
               posicao,
               altura,
               peso,
               idade,
               dataNascimento AS data_nascimento,
               paisOrigem AS pais_origem,
               estadoOrigem AS estado_origem,
               cidadeOrigem AS cidade_origem,
               saltoVertical AS salto_vertical,
               envergadura
           FROM atletas
           WHERE registro = ?"#
    )
    .bind(registro)
    .fetch_optional(pool)
    .await
}

/// The roster assignment with the highest season, joined to its team.
pub async fn get_current_team(pool: &SqlitePool, registro: i64) -> Result<Option<AthleteTeam>, sqlx::Error> {
    sqlx::query_as::<_, AthleteTeam>(
        r#"SELECT
               t.id,
               t.nome,
               t.sigla,
               adt.temporada
           FROM atletasDoTime adt
           JOIN times t ON adt.times_id = t.id
           WHERE adt.atletas_registro = ?
           ORDER BY adt.temporada DESC
           LIMIT 1"#
    )
    .bind(registro)
    .fetch_optional(pool)
    .await
}

pub async fn insert_athlete(pool: &SqlitePool, athlete: &AthleteInsert) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO atletas (
               registro, nome, nomeCamisa, numeroCamisa, posicao, altura, peso, idade,
               paisOrigem, estadoOrigem, cidadeOrigem, saltoVertical, envergadura, dataNascimento
           ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#
    )
    .bind(athlete.registro)
    .bind(&athlete.nome)
    .bind(&athlete.nome_camisa)
    .bind(athlete.numero_camisa)
    .bind(athlete.posicao)
    .bind(athlete.altura)
    .bind(athlete.peso)
    .bind(athlete.idade)
    .bind(&athlete.pais_origem)
    .bind(&athlete.estado_origem)
    .bind(&athlete.cidade_origem)
    .bind(athlete.salto_vertical)
    .bind(athlete.envergadura)
    .bind(&athlete.data_nascimento)
    .execute(pool)
    .await?;

    Ok(())
}

/// Deletes an athlete's stat lines, roster assignments and the athlete row,
/// in that order and in one transaction.
///
/// Returns `false` (and changes nothing) when the athlete does not exist.
pub async fn delete_athlete(pool: &SqlitePool, registro: i64) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let found: Option<i64> = sqlx::query_scalar(r#"SELECT registro FROM atletas WHERE registro = ?"#)
        .bind(registro)
        .fetch_optional(&mut *tx)
        .await?;

    if found.is_none() {
        return Ok(false);
    }

    sqlx::query(r#"DELETE FROM atletasEstatisticasJogos WHERE atletas_registro = ?"#)
        .bind(registro)
        .execute(&mut *tx)
        .await?;

    sqlx::query(r#"DELETE FROM atletasDoTime WHERE atletas_registro = ?"#)
        .bind(registro)
        .execute(&mut *tx)
        .await?;

    sqlx::query(r#"DELETE FROM atletas WHERE registro = ?"#)
        .bind(registro)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(true)
}

// Performance queries
pub async fn get_athlete_stat_lines(pool: &SqlitePool, registro: i64) -> Result<Vec<GameStatLine>, sqlx::Error> {
    sqlx::query_as::<_, GameStatLine>(
        r#"SELECT
               jogos_idJogo,
               minutosJogador,
               pontos,
               assistencias,
               rebotes,
               bloqueios,
               roubos,
               turnovers,
               faltasCometidas,
               arremessosConvertidos,
               arremessosTentados,
               lancesLivresConvertidos,
               lancesLivresTentados,
               bolasTresConvertidas,
               bolasTresTentadas
           FROM atletasEstatisticasJogos
           WHERE atletas_registro = ?
           ORDER BY jogos_idJogo"#
    )
    .bind(registro)
    .fetch_all(pool)
    .await
}

pub async fn insert_stat_line(pool: &SqlitePool, registro: i64, line: &NewGameStatLine) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO atletasEstatisticasJogos (
               atletas_registro,
               jogos_idJogo,
               minutosJogador,
               pontos,
               assistencias,
               rebotes,
               bloqueios,
               roubos,
               turnovers,
               faltasCometidas,
               arremessosConvertidos,
               arremessosTentados,
               lancesLivresConvertidos,
               lancesLivresTentados,
               bolasTresConvertidas,
               bolasTresTentadas
           ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#
    )
    .bind(registro)
    .bind(line.jogo_id)
    .bind(line.minutos_jogador)
    .bind(line.pontos)
    .bind(line.assistencias)
    .bind(line.rebotes)
    .bind(line.bloqueios)
    .bind(line.roubos)
    .bind(line.turnovers)
    .bind(line.faltas_cometidas)
    .bind(line.arremessos_convertidos)
    .bind(line.arremessos_tentados)
    .bind(line.lances_livres_convertidos)
    .bind(line.lances_livres_tentados)
    .bind(line.bolas_tres_convertidas)
    .bind(line.bolas_tres_tentadas)
    .execute(pool)
    .await?;

    Ok(())
}

/// Per-game averages rounded to one decimal, all 0 without stat lines.
///
/// Efficiency is points + rebounds + assists + steals + blocks, minus
/// turnovers, missed field goals and missed free throws.
pub async fn get_performance_averages(pool: &SqlitePool, registro: i64) -> Result<PerformanceAverages, sqlx::Error> {
    sqlx::query_as::<_, PerformanceAverages>(
        r#"SELECT
               COALESCE(ROUND(AVG(pontos), 1), 0.0) AS pontos,
               COALESCE(ROUND(AVG(rebotes), 1), 0.0) AS rebotes,
               COALESCE(ROUND(AVG(assistencias), 1), 0.0) AS assistencias,
               COALESCE(ROUND(AVG(
                   pontos + rebotes + assistencias + roubos + bloqueios
                   - turnovers
                   - (arremessosTentados - arremessosConvertidos)
                   - (lancesLivresTentados - lancesLivresConvertidos)
               ), 1), 0.0) AS eficiencia
           FROM atletasEstatisticasJogos
           WHERE atletas_registro = ?"#
    )
    .bind(registro)
    .fetch_one(pool)
    .await
}

/// Single-game maxima for points, rebounds and assists.
///
/// The opponent is whichever side of the game is not the athlete's latest
/// roster team. Categories with no stat lines produce no row.
pub async fn get_performance_records(pool: &SqlitePool, registro: i64) -> Result<Vec<RecordRow>, sqlx::Error> {
    sqlx::query_as::<_, RecordRow>(
        r#"WITH time_atual AS (
               SELECT times_id
               FROM atletasDoTime
               WHERE atletas_registro = ?
               ORDER BY temporada DESC
               LIMIT 1
           ),
           jogos_atleta AS (
               SELECT
                   e.pontos,
                   e.rebotes,
                   e.assistencias,
                   j.dataJogo AS data_jogo,
                   CASE
                       WHEN j.timeCasa = (SELECT times_id FROM time_atual) THEN j.timeFora
                       ELSE j.timeCasa
                   END AS adversario_id
               FROM atletasEstatisticasJogos e
               JOIN jogos j ON j.idJogo = e.jogos_idJogo
               WHERE e.atletas_registro = ?
           )
           SELECT * FROM (
               SELECT 'pontos' AS categoria, ja.pontos AS valor, ja.data_jogo, t.nome AS adversario
               FROM jogos_atleta ja
               LEFT JOIN times t ON t.id = ja.adversario_id
               ORDER BY ja.pontos DESC, ja.data_jogo
               LIMIT 1
           )
           UNION ALL
           SELECT * FROM (
               SELECT 'rebotes' AS categoria, ja.rebotes AS valor, ja.data_jogo, t.nome AS adversario
               FROM jogos_atleta ja
               LEFT JOIN times t ON t.id = ja.adversario_id
               ORDER BY ja.rebotes DESC, ja.data_jogo
               LIMIT 1
           )
           UNION ALL
           SELECT * FROM (
               SELECT 'assistencias' AS categoria, ja.assistencias AS valor, ja.data_jogo, t.nome AS adversario
               FROM jogos_atleta ja
               LEFT JOIN times t ON t.id = ja.adversario_id
               ORDER BY ja.assistencias DESC, ja.data_jogo
               LIMIT 1
           )"#
    )
    .bind(registro)
    .bind(registro)
    .fetch_all(pool)
    .await
}

// Championship and game queries
pub async fn get_team_championships(pool: &SqlitePool, team_id: i64) -> Result<Vec<Championship>, sqlx::Error> {
    sqlx::query_as::<_, Championship>(
        r#"SELECT
               c.edicao,
               c.nome,
               c.localJogo AS local_jogo
           FROM campeonatos c
           JOIN timesDoCampeonato tc ON tc.campeonatos_edicao = c.edicao
           WHERE tc.times_id = ?
           ORDER BY c.edicao"#
    )
    .bind(team_id)
    .fetch_all(pool)
    .await
}

pub async fn championship_exists(pool: &SqlitePool, edicao: i64) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar(r#"SELECT edicao FROM campeonatos WHERE edicao = ?"#)
        .bind(edicao)
        .fetch_optional(pool)
        .await?;

    Ok(found.is_some())
}

pub async fn get_championship_games(pool: &SqlitePool, edicao: i64) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT
               j.idJogo AS id_jogo,
               j.dataJogo AS data_jogo,
               j.quadra,
               j.timeCasa AS time_casa,
               j.timeFora AS time_fora,
               j.pontosCasa AS pontos_casa,
               j.pontosFora AS pontos_fora
           FROM jogos j
           JOIN jogosDoCampeonato jc ON jc.jogos_idJogo = j.idJogo
           WHERE jc.campeonatos_edicao = ?
           ORDER BY j.dataJogo, j.idJogo"#
    )
    .bind(edicao)
    .fetch_all(pool)
    .await
}

pub async fn get_game_by_id(pool: &SqlitePool, game_id: i64) -> Result<Option<GameDetail>, sqlx::Error> {
    sqlx::query_as::<_, GameDetail>(
        r#"SELECT
               j.idJogo AS id_jogo,
               j.dataJogo AS data_jogo,
               j.quadra,
               j.timeCasa AS time_casa,
               j.timeFora AS time_fora,
               j.pontosCasa AS pontos_casa,
               j.pontosFora AS pontos_fora,
               casa.nome AS nome_time_casa,
               fora.nome AS nome_time_fora
           FROM jogos j
           LEFT JOIN times casa ON casa.id = j.timeCasa
           LEFT JOIN times fora ON fora.id = j.timeFora
           WHERE j.idJogo = ?"#
    )
    .bind(game_id)
    .fetch_optional(pool)
    .await
}

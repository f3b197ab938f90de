//! Leitura do xlsx
//!
//! As pastas de teste são geradas em memória com rust_xlsxwriter e
//! lidas de volta pelo mesmo caminho usado com os bytes baixados.

use candidato_status_rust::busca::buscar_status;
use candidato_status_rust::fase::Fase;
use candidato_status_rust::planilha::parse_xlsx;
use rust_xlsxwriter::Workbook;

/// Pasta de trabalho com o cabeçalho oficial e alguns candidatos
fn planilha_exemplo() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Nº").unwrap();
    for (i, fase) in Fase::TODAS.iter().enumerate() {
        worksheet.write_string(0, (i + 1) as u16, fase.coluna()).unwrap();
    }

    worksheet.write_number(1, 0, 1.0).unwrap();
    worksheet.write_string(1, 1, "Susana Silva").unwrap();
    worksheet.write_number(2, 0, 2.0).unwrap();
    worksheet.write_string(2, 4, "Bruno Ferreira").unwrap();

    workbook.save_to_buffer().unwrap()
}

#[test]
fn parse_le_cabecalho_e_linhas() {
    let tabela = parse_xlsx(&planilha_exemplo()).unwrap();

    assert_eq!(tabela.num_colunas(), 6);
    assert_eq!(tabela.num_linhas(), 2);
    assert_eq!(tabela.indice_coluna("INSCRIÇÃO: REALIZADA"), Some(1));
    assert_eq!(tabela.celula(0, 1), "Susana Silva");
}

#[test]
fn celulas_vazias_viram_texto_vazio() {
    let tabela = parse_xlsx(&planilha_exemplo()).unwrap();
    assert_eq!(tabela.celula(0, 2), "");
    assert_eq!(tabela.celula(1, 1), "");
}

#[test]
fn numeros_sao_coagidos_para_texto() {
    let tabela = parse_xlsx(&planilha_exemplo()).unwrap();
    assert_eq!(tabela.celula(0, 0), "1");
}

#[test]
fn busca_funciona_sobre_planilha_lida() {
    let tabela = parse_xlsx(&planilha_exemplo()).unwrap();
    let busca = buscar_status(&tabela, "bruno");
    assert_eq!(busca.resultado.unwrap().fase, Fase::Aprovados);
}

#[test]
fn bytes_invalidos_dao_erro_de_planilha() {
    let erro = parse_xlsx(b"isto nao e um xlsx").unwrap_err();
    assert!(erro.to_string().contains("planilha"));
}

#[test]
fn planilha_sem_linhas_de_dados() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "INSCRIÇÃO: REALIZADA").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let tabela = parse_xlsx(&bytes).unwrap();
    assert_eq!(tabela.num_linhas(), 0);
    assert!(buscar_status(&tabela, "qualquer").resultado.is_none());
}

#[test]
fn parse_a_partir_de_arquivo_em_disco() {
    let dir = tempfile::tempdir().expect("tempdir");
    let caminho = dir.path().join("seletivo.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "INSCRIÇÃO: REALIZADA").unwrap();
    worksheet.write_string(1, 0, "Helena Martins").unwrap();
    workbook.save(&caminho).unwrap();

    let bytes = std::fs::read(&caminho).unwrap();
    let tabela = parse_xlsx(&bytes).unwrap();
    let busca = buscar_status(&tabela, "helena");
    assert_eq!(busca.resultado.unwrap().nome_oficial, "Helena Martins");
}

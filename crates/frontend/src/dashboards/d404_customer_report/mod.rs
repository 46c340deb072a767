pub mod api;
pub mod ui;

use crate::shared::export::{CsvExportable, CsvField};
use contracts::dashboards::d404_customer_report::CustomerRow;

pub const CSV_FILENAME: &str = "relatorio_clientes.csv";

impl CsvExportable for CustomerRow {
    fn headers() -> Vec<&'static str> {
        vec!["nome_cliente", "contato", "total_vendas", "ultima_compra_data"]
    }

    fn to_csv_row(&self) -> Vec<CsvField> {
        vec![
            CsvField::Text(self.nome_cliente.clone()),
            CsvField::Text(self.contato.clone()),
            CsvField::Plain(self.total_vendas.to_string()),
            CsvField::Plain(self.ultima_compra_data.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::to_csv;

    #[test]
    fn test_customer_csv() {
        let rows = vec![
            CustomerRow {
                nome_cliente: "Maria \"Mari\" Souza".to_string(),
                contato: "(11) 99999-0000".to_string(),
                total_vendas: 12,
                ultima_compra_data: "2024-04-30".to_string(),
            },
            CustomerRow {
                nome_cliente: "João".to_string(),
                contato: "joao@mail.com".to_string(),
                total_vendas: 3,
                ultima_compra_data: "2023-12-01".to_string(),
            },
        ];
        assert_eq!(
            to_csv(&rows),
            "nome_cliente,contato,total_vendas,ultima_compra_data\n\
             \"Maria \"\"Mari\"\" Souza\",\"(11) 99999-0000\",12,2024-04-30\n\
             \"João\",\"joao@mail.com\",3,2023-12-01"
        );
    }
}

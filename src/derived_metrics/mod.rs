pub mod metric_calculator;

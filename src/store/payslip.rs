//! Fixed-layout payslip text rendering.

use std::fmt::Write as _;

use rust_decimal::Decimal;

use crate::calculation::round2;
use crate::models::PayrollRecord;

const TITLE_BANNER: &str = "=========== PAYROLL STATEMENT (Monthly) ===========";
const CLOSING_BANNER: &str = "===================================================";

/// Renders one stored record as the monospace payslip text block.
///
/// The section order is fixed: header block, `Attendance Summary`,
/// `Earnings`, `Government Deductions`, `Tax`, then the `NET PAY` line.
/// Monetary values are displayed with thousands separators; the stored
/// record itself never carries separators.
///
/// # Examples
///
/// ```
/// use payroll_engine::store::format_payslip;
/// # use payroll_engine::models::PayrollRecord;
/// # use rust_decimal_macros::dec;
/// # let record = PayrollRecord {
/// #     employee_id: "10001".to_string(),
/// #     employee_name: "Jose Crisostomo".to_string(),
/// #     month: "2024-06".parse().unwrap(),
/// #     days_present: 22,
/// #     late_minutes: 30,
/// #     late_deduction: dec!(60.00),
/// #     monthly_basic_salary: dec!(20000.00),
/// #     total_allowances_monthly: dec!(3500.00),
/// #     gross_pay: dec!(23440.00),
/// #     sss: dec!(900.00),
/// #     phil_health: dec!(300.00),
/// #     pag_ibig: dec!(400.00),
/// #     total_deductions_before_tax: dec!(1600.00),
/// #     taxable_income: dec!(18400.00),
/// #     withholding_tax: dec!(0.00),
/// #     net_pay: dec!(21840.00),
/// # };
/// let payslip = format_payslip(&record);
/// assert!(payslip.contains("NET PAY: 21,840.00"));
/// ```
pub fn format_payslip(record: &PayrollRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{TITLE_BANNER}");
    let _ = writeln!(out, "Employee #: {}", record.employee_id);
    let _ = writeln!(out, "Name      : {}", record.employee_name);
    let _ = writeln!(out, "Month     : {}", record.month);
    let _ = writeln!(out);

    let _ = writeln!(out, "Attendance Summary");
    let _ = writeln!(out, "Days Present : {}", record.days_present);
    let _ = writeln!(
        out,
        "Late Minutes : {} (after 10-min grace)",
        record.late_minutes
    );
    let _ = writeln!(out, "Late Deduct  : {}", format_money(record.late_deduction));
    let _ = writeln!(out);

    let _ = writeln!(out, "Earnings");
    let _ = writeln!(
        out,
        "Monthly Basic Salary : {}",
        format_money(record.monthly_basic_salary)
    );
    let _ = writeln!(
        out,
        "Allowances (Monthly) : {}",
        format_money(record.total_allowances_monthly)
    );
    let _ = writeln!(
        out,
        "Gross Pay (after late): {}",
        format_money(record.gross_pay)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Government Deductions");
    let _ = writeln!(out, "SSS       : {}", format_money(record.sss));
    let _ = writeln!(
        out,
        "PhilHealth: {} (employee share)",
        format_money(record.phil_health)
    );
    let _ = writeln!(out, "Pag-IBIG  : {}", format_money(record.pag_ibig));
    let _ = writeln!(
        out,
        "Total Gov Deductions: {}",
        format_money(record.total_deductions_before_tax)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Tax");
    let _ = writeln!(
        out,
        "Taxable Income (Basic - Gov Deductions): {}",
        format_money(record.taxable_income)
    );
    let _ = writeln!(out, "Withholding Tax: {}", format_money(record.withholding_tax));
    let _ = writeln!(out);

    let _ = writeln!(out, "NET PAY: {}", format_money(record.net_pay));
    let _ = writeln!(out, "{CLOSING_BANNER}");

    out
}

/// Formats a monetary value for display: two decimal places with comma
/// thousands separators, e.g. `15,000.00`.
pub fn format_money(value: Decimal) -> String {
    let text = round2(value).to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}.{fraction}")
}

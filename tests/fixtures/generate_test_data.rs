// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成批量导入测试数据集 JSON 文件
// 输出: tests/fixtures/datasets/*.json
// ==========================================

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value as JsonValue};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use user_order_console::importer::fixture_generator::{
    generate_order_fixtures, generate_user_fixtures, FixtureContext,
};

// 固定种子: 数据集可复现
const SEED: u64 = 20240601;

fn datasets_dir() -> PathBuf {
    PathBuf::from("tests/fixtures/datasets")
}

fn write_dataset(file_name: &str, value: &JsonValue) -> Result<(), Box<dyn Error>> {
    let path = datasets_dir().join(file_name);
    fs::write(&path, serde_json::to_string_pretty(value)?)?;
    println!("  生成 {}", path.display());
    Ok(())
}

// 1. 正常用户数据 (100条，数组形式)
fn generate_valid_users(rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let users = generate_user_fixtures(100, rng);
    write_dataset("valid_users.json", &serde_json::to_value(&users)?)
}

// 2. 正常用户数据 (包装对象形式)
fn generate_valid_users_wrapped(rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let users = generate_user_fixtures(20, rng);
    write_dataset(
        "valid_users_wrapped.json",
        &json!({ "users": serde_json::to_value(&users)? }),
    )
}

// 3. 边界数据集 (恰好1000条)
fn generate_max_size_users(rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let users = generate_user_fixtures(1000, rng);
    write_dataset("max_size_users.json", &serde_json::to_value(&users)?)
}

// 4. 超出上限数据集 (1001条，应被拒绝)
fn generate_oversized_users(rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let users = generate_user_fixtures(1001, rng);
    write_dataset("oversized_users.json", &serde_json::to_value(&users)?)
}

// 5. 空数组 (应被拒绝，与超限是不同错误)
fn generate_empty_users() -> Result<(), Box<dyn Error>> {
    write_dataset("empty_users.json", &json!([]))
}

// 6. 缺失必填字段 (第3条 name 为空)
fn generate_missing_required_fields(rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let mut users: Vec<JsonValue> = generate_user_fixtures(5, rng)
        .iter()
        .map(|u| serde_json::to_value(u).unwrap())
        .collect();
    users[2]["name"] = json!("");
    write_dataset("missing_name_users.json", &json!(users))
}

// 7. 邮箱格式错误 (第2条)
fn generate_invalid_email(rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let mut users: Vec<JsonValue> = generate_user_fixtures(4, rng)
        .iter()
        .map(|u| serde_json::to_value(u).unwrap())
        .collect();
    users[1]["email"] = json!("sin-arroba.example");
    write_dataset("invalid_email_users.json", &json!(users))
}

// 8. 正常订单数据 (50条，兜底用户池)
fn generate_valid_orders(rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let orders = generate_order_fixtures(50, rng, &FixtureContext::default());
    write_dataset("valid_orders.json", &serde_json::to_value(&orders)?)
}

// 9. 订单类型错误混合 (非整数 user_id / 非正 amount)
fn generate_invalid_orders(rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let mut orders: Vec<JsonValue> = generate_order_fixtures(6, rng, &FixtureContext::default())
        .iter()
        .map(|o| serde_json::to_value(o).unwrap())
        .collect();
    orders[1]["user_id"] = json!("uno");
    orders[3]["amount"] = json!(0);
    write_dataset("invalid_orders.json", &json!(orders))
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    fs::create_dir_all(datasets_dir())?;

    let mut rng = StdRng::seed_from_u64(SEED);

    generate_valid_users(&mut rng)?;
    generate_valid_users_wrapped(&mut rng)?;
    generate_max_size_users(&mut rng)?;
    generate_oversized_users(&mut rng)?;
    generate_empty_users()?;
    generate_missing_required_fields(&mut rng)?;
    generate_invalid_email(&mut rng)?;
    generate_valid_orders(&mut rng)?;
    generate_invalid_orders(&mut rng)?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

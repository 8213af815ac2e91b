//! Global CSS for the CropShield desktop app.
//!
//! Field-office look: white cards on a pale green page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --leaf: #2f7d32;
  --leaf-dark: #1f5a22;
  --leaf-pale: #eef6ee;
  --soil: #6d4c41;
  --sky: #1e88e5;

  --text-primary: #1b1b1b;
  --text-muted: #5f6b5f;
  --border: #cfdccf;

  --danger: #c62828;
  --success: #2e7d32;

  --font-body: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  --font-mono: 'SF Mono', 'Consolas', monospace;

  --radius: 8px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--leaf-pale);
  color: var(--text-primary);
  font-family: var(--font-body);
  line-height: 1.5;
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  padding: 0.75rem 1.5rem;
  background: var(--leaf);
  color: #fff;
}

.app-title {
  font-size: 1.25rem;
  font-weight: 700;
}

.nav-links {
  display: flex;
  gap: 1rem;
  flex: 1;
}

.nav-link {
  color: rgba(255, 255, 255, 0.85);
  text-decoration: none;
  padding: 0.25rem 0.5rem;
  border-radius: var(--radius);
}

.nav-link.active,
.nav-link:hover {
  background: var(--leaf-dark);
  color: #fff;
}

.nav-session {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

/* === Layout === */
.page {
  max-width: 640px;
  margin: 1.5rem auto;
  padding: 0 1rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.card {
  background: #fff;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.page-title {
  font-size: 1.4rem;
  margin-bottom: 1rem;
  color: var(--leaf-dark);
}

.section-title {
  font-size: 1.1rem;
  margin-bottom: 0.75rem;
}

.hint {
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Forms === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  margin-bottom: 0.75rem;
}

.input-label {
  font-size: 0.875rem;
  font-weight: 600;
}

.input-hint {
  font-weight: 400;
  color: var(--text-muted);
}

.input-field {
  padding: 0.5rem 0.625rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  font: inherit;
}

.input-field:focus {
  outline: none;
  border-color: var(--leaf);
  box-shadow: 0 0 0 2px rgba(47, 125, 50, 0.2);
}

.input-field.invalid {
  border-color: var(--danger);
}

.input-warning {
  color: var(--danger);
  font-size: 0.8rem;
}

.readings {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.75rem 1rem;
  margin-bottom: 1rem;
}

.readings legend {
  padding: 0 0.25rem;
  font-weight: 600;
}

.readings-grid,
.geo-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0 1rem;
}

.wallet-row {
  display: flex;
  align-items: flex-end;
  gap: 0.75rem;
}

.wallet-row .form-field {
  flex: 1;
}

.wallet-connect,
.image-picker-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.mode-switch {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.pill {
  border: 1px solid var(--border);
  background: #fff;
  border-radius: 999px;
  padding: 0.25rem 0.875rem;
  cursor: pointer;
}

.pill.selected {
  background: var(--leaf);
  border-color: var(--leaf);
  color: #fff;
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-danger {
  border-radius: var(--radius);
  padding: 0.5rem 1.1rem;
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--leaf);
  color: #fff;
  border: none;
}

.btn-primary:hover:not(:disabled) {
  background: var(--leaf-dark);
}

.btn-secondary {
  background: #fff;
  color: var(--leaf-dark);
  border: 1px solid var(--leaf);
}

.btn-danger {
  background: transparent;
  color: #fff;
  border: 1px solid rgba(255, 255, 255, 0.7);
}

.btn-link {
  background: none;
  border: none;
  color: var(--sky);
  cursor: pointer;
  text-decoration: underline;
}

button:disabled {
  opacity: 0.6;
  cursor: default;
}

/* === Status === */
.status-line {
  margin-top: 0.75rem;
  font-size: 0.9rem;
}

.status-line.loading {
  color: var(--text-muted);
}

.status-line.error {
  color: var(--danger);
}

.status-line.success {
  color: var(--success);
}

/* === Payout === */
.payout {
  display: grid;
  grid-template-columns: max-content 1fr;
  gap: 0.375rem 1.25rem;
  margin-bottom: 1rem;
}

.payout dt {
  color: var(--text-muted);
}

.payout .amount {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--leaf-dark);
}

.onchain {
  margin-bottom: 0.75rem;
  word-break: break-all;
}

.onchain a {
  color: var(--sky);
}

.tx-json {
  margin-top: 0.75rem;
  padding: 0.75rem;
  background: #f5f5f5;
  border-radius: var(--radius);
  font-family: var(--font-mono);
  font-size: 0.8rem;
  overflow-x: auto;
}
"#;

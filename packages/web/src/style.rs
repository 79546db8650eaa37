//! Base stylesheet, injected once from `App`.

pub const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: 'Segoe UI', Roboto, sans-serif; background: #f5f6fa; color: #1f2937; }
a { color: #1976d2; }
button { cursor: pointer; font: inherit; }

.page { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
.card { background: #fff; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,.12); padding: 1.5rem; margin-bottom: 1rem; }
.form-field { display: flex; flex-direction: column; margin-bottom: 1rem; }
.form-field label { font-size: .875rem; margin-bottom: .25rem; }
.form-field input, .form-field textarea, .form-field select {
  padding: .5rem .75rem; border: 1px solid #cbd5e1; border-radius: 4px; font: inherit;
}
.field-error { color: #d32f2f; font-size: .8rem; margin-top: .25rem; }
.helper-text { color: #6b7280; font-size: .8rem; margin-top: .25rem; }

.btn { border: none; border-radius: 4px; padding: .55rem 1.25rem; background: #e5e7eb; }
.btn-primary { background: #1976d2; color: #fff; }
.btn-danger { background: #d32f2f; color: #fff; }
.btn-success { background: #2e7d32; color: #fff; }
.btn:disabled { opacity: .55; cursor: default; }

.alert { padding: .75rem 1rem; border-radius: 4px; margin-bottom: 1rem; white-space: pre-line; }
.alert-success { background: #e8f5e9; color: #1b5e20; }
.alert-error { background: #fdecea; color: #b71c1c; }
.alert-info { background: #e3f2fd; color: #0d47a1; }
.alert-warning { background: #fff8e1; color: #e65100; }
.error-list { margin: 0 0 1rem; padding-left: 1.5rem; color: #b71c1c; }
.error-list li { margin-bottom: .25rem; }

.snackbar { position: fixed; bottom: 1.5rem; left: 50%; transform: translateX(-50%); z-index: 30; }
.snackbar .alert { display: flex; align-items: center; gap: .75rem; margin: 0; box-shadow: 0 2px 8px rgba(0,0,0,.25); }
.snackbar-close { background: none; border: none; font-size: 1.1rem; }

.spinner-wrap { display: flex; justify-content: center; padding: 3rem; }
.spinner { width: 42px; height: 42px; border: 4px solid #e0e0e0; border-top-color: #1976d2; border-radius: 50%; animation: spin .8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }

.drawer { position: fixed; top: 0; left: 0; bottom: 0; width: 240px; background: #1e293b; color: #e2e8f0; display: flex; flex-direction: column; padding: 1rem; }
.drawer-header h2 { margin: 0 0 .25rem; font-size: 1.1rem; }
.drawer-user { color: #94a3b8; font-size: .85rem; margin: 0 0 1rem; }
.drawer-items { list-style: none; margin: 0; padding: 0; flex: 1; }
.drawer-item { display: flex; align-items: center; gap: .5rem; width: 100%; text-align: left; background: none; border: none; color: inherit; padding: .6rem .75rem; border-radius: 6px; margin-bottom: .25rem; }
.drawer-item:hover { background: #334155; }
.drawer-item-active { background: #1976d2; color: #fff; }
.drawer-footer { border-top: 1px solid #334155; padding-top: .5rem; }
.drawer-toggle { display: none; position: fixed; top: .75rem; left: .75rem; z-index: 20; background: #1e293b; color: #fff; border: none; border-radius: 6px; padding: .5rem .65rem; }
.dashboard-main { margin-left: 256px; padding: 1.5rem; }
.dashboard-topbar { display: flex; justify-content: flex-end; align-items: center; gap: 1rem; margin-bottom: 1rem; }
@media (max-width: 900px) {
  .drawer { transform: translateX(-100%); transition: transform .2s; z-index: 15; }
  .drawer-open { transform: none; }
  .drawer-toggle { display: block; }
  .dashboard-main { margin-left: 0; padding-top: 3.5rem; }
}

.notif-menu { position: relative; }
.notif-bell { position: relative; background: none; border: none; font-size: 1.1rem; color: #1e293b; }
.notif-badge { position: absolute; top: -6px; right: -8px; background: #d32f2f; color: #fff; border-radius: 999px; font-size: .65rem; padding: 1px 5px; }
.notif-dropdown { position: absolute; right: 0; top: 2.2rem; width: 320px; background: #fff; border-radius: 8px; box-shadow: 0 4px 16px rgba(0,0,0,.2); padding: .5rem; z-index: 25; }
.notif-entry { display: flex; justify-content: space-between; gap: .5rem; padding: .5rem; border-bottom: 1px solid #f1f5f9; }
.notif-entry p { margin: 0; font-size: .85rem; }
.notif-date { color: #94a3b8; font-size: .7rem; }
.notif-delete { background: none; border: none; color: #94a3b8; }
.notif-empty { text-align: center; color: #6b7280; padding: 1rem 0; }
.notif-view-all { width: 100%; background: none; border: none; color: #1976d2; padding: .5rem; }

.stepper { display: flex; justify-content: space-between; margin-bottom: 1.5rem; }
.step { flex: 1; text-align: center; font-size: .85rem; color: #9ca3af; padding-bottom: .5rem; border-bottom: 3px solid #e5e7eb; }
.step-active { color: #1976d2; border-color: #1976d2; font-weight: 600; }

.strength-bar { margin-top: .5rem; }
.strength-caption { display: block; font-size: .75rem; color: #6b7280; }
.strength-segments { display: flex; gap: .4rem; height: 8px; margin: .25rem 0; }
.strength-segment { flex: 1; border-radius: 4px; }

.star-rating { display: flex; gap: .25rem; }
.star { background: none; border: none; font-size: 1.6rem; color: #d1d5db; }
.star-filled { color: #fbc02d; }

.chips { display: flex; flex-wrap: wrap; gap: .5rem; margin: .5rem 0; }
.chip { background: #e3f2fd; color: #0d47a1; border: none; border-radius: 999px; padding: .3rem .8rem; font-size: .8rem; }
.chip-selected { background: #1976d2; color: #fff; }
.chip-remove { margin-left: .4rem; }

.table { width: 100%; border-collapse: collapse; }
.table th, .table td { text-align: left; padding: .6rem .75rem; border-bottom: 1px solid #e5e7eb; font-size: .9rem; }

.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
.stat-card { background: #fff; border-radius: 8px; padding: 1.25rem; box-shadow: 0 1px 4px rgba(0,0,0,.12); }
.stat-value { font-size: 1.8rem; font-weight: 700; margin: 0; }
.stat-label { color: #6b7280; margin: 0; }

.project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }
.empty-state { text-align: center; color: #6b7280; padding: 2rem; }

.home-hero { text-align: center; padding: 4rem 1rem; }
.home-hero h1 { font-size: 2.2rem; margin-bottom: .5rem; }
.home-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 1.5rem; }
.site-footer { text-align: center; color: #94a3b8; padding: 2rem 0; font-size: .85rem; }

.auth-card { max-width: 480px; margin: 3rem auto; }
.wizard-card { max-width: 640px; margin: 2rem auto; }
.wizard-nav { display: flex; justify-content: space-between; margin-top: 1.5rem; }
.profile-photo { width: 96px; height: 96px; border-radius: 50%; object-fit: cover; }
"#;
